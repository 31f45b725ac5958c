use marquee_clock::{Marquee, Message, PanelFont, PanelFrame, shared_constants::FRAME_COLS};

fn message(text: &str) -> Message {
    Message::try_from(text).expect("test text fits the message buffer")
}

/// Step until finished, returning how many step calls it took.
fn steps_to_finish(marquee: &mut Marquee) -> usize {
    let mut steps = 0;
    loop {
        steps += 1;
        assert!(steps <= 10_000, "marquee did not finish");
        if marquee.step() {
            return steps;
        }
    }
}

#[test]
fn scroll_completes_after_text_width_plus_visible_width_steps() {
    // Font9x15Bold advances 9 pixels per glyph: "AB" is 18 pixels wide.
    let mut marquee = Marquee::new(&message("AB"), PanelFont::Font9x15Bold);
    assert_eq!(steps_to_finish(&mut marquee), 18 + FRAME_COLS);
}

#[test]
fn empty_text_still_reaches_finished() {
    let mut marquee = Marquee::new(&message(""), PanelFont::Font9x15Bold);
    assert_eq!(steps_to_finish(&mut marquee), FRAME_COLS);
}

#[test]
fn step_keeps_reporting_finished_after_completion() {
    let mut marquee = Marquee::new(&message("A"), PanelFont::Font9x15Bold);
    steps_to_finish(&mut marquee);
    assert!(marquee.step());
    assert!(marquee.is_finished());
}

#[test]
fn text_enters_from_the_right_edge() {
    // At start the text sits entirely off the right edge, so the first
    // rendered frame is blank; it becomes visible as it scrolls in.
    let mut marquee = Marquee::new(&message("A"), PanelFont::Font9x15Bold);
    assert!(marquee.render().is_blank());

    for _ in 0..FRAME_COLS / 2 {
        marquee.step();
    }
    assert!(marquee.render().lit_pixels() > 0);
}

#[test]
fn frame_is_blank_after_scroll_off() {
    let mut marquee = Marquee::new(&message("HELLO"), PanelFont::Font9x15Bold);
    steps_to_finish(&mut marquee);
    assert!(marquee.render().is_blank());
}

#[test]
fn wider_font_takes_proportionally_more_steps() {
    let narrow = steps_to_finish(&mut Marquee::new(&message("AA"), PanelFont::Font5x7));
    let wide = steps_to_finish(&mut Marquee::new(&message("AA"), PanelFont::Font9x15Bold));
    assert_eq!(narrow, 2 * 5 + FRAME_COLS);
    assert_eq!(wide, 2 * 9 + FRAME_COLS);
}

#[test]
fn frame_packs_pixels_msb_first() {
    let mut frame = PanelFrame::new();
    frame.set_pixel(0, 0, true);
    frame.set_pixel(9, 1, true);
    assert_eq!(frame.row_bytes(0)[0], 0x80);
    assert_eq!(frame.row_bytes(1)[1], 0x40);
    assert!(frame.pixel(0, 0));
    assert!(!frame.pixel(1, 0));
    assert_eq!(frame.lit_pixels(), 2);
}

#[test]
fn frame_ignores_out_of_bounds_pixels() {
    let mut frame = PanelFrame::new();
    frame.set_pixel(1_000, 1_000, true);
    assert!(frame.is_blank());
    assert!(!frame.pixel(1_000, 1_000));
}
