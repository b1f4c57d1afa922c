//! Bottom status bar: flower count, instructions and play time

pub const BANNER_HEIGHT: f32 = 35.0;
pub const INSTRUCTIONS: &str = "Water the plants to see the flowers bloom!";

pub fn flower_count_label(grown: usize, total: usize) -> String {
    format!("Flowers: {} / {}", grown, total)
}

/// `m:ss` for a non-negative number of seconds
pub fn format_elapsed(seconds: f64) -> String {
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flower_count_label() {
        assert_eq!(flower_count_label(3, 9), "Flowers: 3 / 9");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0.0), "0:00");
        assert_eq!(format_elapsed(9.99), "0:09");
        assert_eq!(format_elapsed(61.0), "1:01");
        assert_eq!(format_elapsed(600.0), "10:00");
        assert_eq!(format_elapsed(-3.0), "0:00");
        assert_eq!(format_elapsed(604_800.5), "10080:00");
    }
}
