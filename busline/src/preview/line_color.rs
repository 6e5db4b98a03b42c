const FNV_OFFSET: u32 = 0x811c9dc5;
const FNV_PRIME: u32 = 0x01000193;

/// stable `#rrggbb` stroke colour for a line, derived from an FNV-1a hash of
/// its id so the same line is drawn the same way on every run.
pub fn line_color(line_id: &str) -> String {
    let hash = line_id
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ b as u32).wrapping_mul(FNV_PRIME));
    format!("#{:06x}", hash & 0x00ff_ffff)
}

#[cfg(test)]
mod test {
    use super::line_color;

    #[test]
    fn test_color_is_stable_hex() {
        let c = line_color("110100011234");
        assert_eq!(c, line_color("110100011234"));
        assert_eq!(c.len(), 7);
        assert!(c.starts_with('#'));
        assert!(c[1..].chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn test_colors_differ_between_lines() {
        assert_ne!(line_color("a"), line_color("b"));
    }
}
