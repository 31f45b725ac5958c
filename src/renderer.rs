//! The marquee renderer: consumes readings, drives scroll animations.

use defmt::info;
use embassy_futures::yield_now;
use embassy_time::Instant;

use crate::Result;
use crate::marquee::Marquee;
use crate::never::Never;
use crate::panel::Panel;
use crate::sampler::Sampler;
use crate::shared_constants::{PANEL_FONT, STEP_PERIOD};

/// Run the renderer forever.
///
/// Each cycle blocks on the channel for the next reading, formats it, then
/// scrolls it fully off-screen at [`STEP_PERIOD`] before looking at the
/// channel again. A reading published mid-scroll silently supersedes its
/// predecessor in the slot and is picked up on the next cycle, so the panel
/// may show slightly stale data while a scroll finishes. That trade keeps
/// render cycles atomic: exactly one marquee is ever in flight.
///
/// The step loop polls a monotonic clock and yields between polls rather
/// than sleeping, so the sampler and the refresh driver keep running at full
/// cadence on the same executor.
///
/// # Errors
///
/// Returns `Error::Format` if a reading cannot fit the message buffer, which
/// indicates a sizing defect rather than a runtime condition.
pub async fn run(sampler: &Sampler<'_>, panel: &Panel<'_>) -> Result<Never> {
    info!("Marquee renderer started (step: {} ms)", STEP_PERIOD.as_millis());
    loop {
        // Await: block until the sampler publishes.
        let reading = sampler.wait().await;

        // Format + start-scroll.
        let message = reading.message()?;
        let mut marquee = Marquee::new(&message, PANEL_FONT);
        panel.write_frame(marquee.render());

        // Step-loop: advance one pixel per period until scrolled off.
        let mut last_step = Instant::now();
        loop {
            if last_step.elapsed() < STEP_PERIOD {
                yield_now().await;
                continue;
            }
            last_step = Instant::now();
            let finished = marquee.step();
            panel.write_frame(marquee.render());
            if finished {
                break;
            }
        }
    }
}
