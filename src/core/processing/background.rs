use std::collections::HashMap;

use tracing::debug;

use crate::core::buffer::PixelBuffer;
use crate::types::Pixel;

/// Returned when no pixel is eligible to vote for the background.
pub const DEFAULT_BACKGROUND: Pixel = Pixel::WHITE;

/// Most frequent color among pixels that are not fully transparent.
///
/// A color takes the lead only when its count strictly exceeds the current
/// maximum, so on a tie the color that reached that count first is kept.
pub fn estimate_background(buffer: &PixelBuffer) -> Pixel {
    let mut counts: HashMap<Pixel, usize> = HashMap::new();
    let mut max_count = 0usize;
    let mut background = DEFAULT_BACKGROUND;

    for (_, _, color) in buffer.pixels() {
        if color.a == 0 {
            continue;
        }
        let count = counts.entry(color).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            background = color;
        }
    }

    debug!(
        "Background {} ({} of {} pixels, {} distinct colors)",
        background,
        max_count,
        buffer.width() * buffer.height(),
        counts.len()
    );
    background
}
