use marquee_clock::{Reading, shared_constants::BANNER};

fn sample_reading() -> Reading {
    Reading {
        hour: 14,
        minute: 5,
        second: 9,
        day: 3,
        month: 11,
        year: 2024,
        temperature: 23.456,
    }
}

#[test]
fn segments_are_zero_padded_and_rounded() {
    let message = sample_reading().message().expect("message must fit");
    assert!(message.contains("Time: 14:05:09"), "time segment: {message}");
    assert!(message.contains("Date: 03/11/2024"), "date segment: {message}");
    assert!(message.contains("Temp: 23.46C"), "temperature segment: {message}");
}

#[test]
fn banner_leads_the_message() {
    let message = sample_reading().message().expect("message must fit");
    assert!(message.starts_with(BANNER));
}

#[test]
fn worst_case_reading_fits_the_buffer() {
    // Widest digit counts in every field, negative three-digit temperature.
    let reading = Reading {
        hour: 23,
        minute: 59,
        second: 59,
        day: 31,
        month: 12,
        year: 9999,
        temperature: -999.99,
    };
    let message = reading.message().expect("worst case must fit");
    assert!(message.contains("Temp: -999.99C"));
}

#[test]
fn out_of_range_values_are_forwarded_unvalidated() {
    // The sampler forwards whatever the peripheral reports; formatting must
    // not reject it.
    let reading = Reading {
        hour: 25,
        minute: 61,
        second: 61,
        day: 32,
        month: 13,
        year: 2024,
        temperature: 0.0,
    };
    let message = reading.message().expect("message must fit");
    assert!(message.contains("Date: 32/13/2024"));
}

#[test]
fn midnight_formats_with_all_zeros() {
    let reading = Reading {
        hour: 0,
        minute: 0,
        second: 0,
        day: 1,
        month: 1,
        year: 2024,
        temperature: 0.25,
    };
    let message = reading.message().expect("message must fit");
    assert!(message.contains("Time: 00:00:00"));
    assert!(message.contains("Date: 01/01/2024"));
    assert!(message.contains("Temp: 0.25C"));
}
