use std::fmt;

/// What happened to one tagged literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralEdit {
    pub segments: usize,
    pub holes: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

/// Totals for a unit, or for a whole bundle once merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub literals_minified: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
}

impl TransformStats {
    pub fn record(&mut self, edit: &LiteralEdit) {
        self.literals_minified += 1;
        self.bytes_before += edit.bytes_before;
        self.bytes_after += edit.bytes_after;
    }

    pub fn merge(&mut self, other: &TransformStats) {
        self.literals_minified += other.literals_minified;
        self.bytes_before += other.bytes_before;
        self.bytes_after += other.bytes_after;
    }

    pub fn saved_bytes(&self) -> usize {
        self.bytes_before.saturating_sub(self.bytes_after)
    }

    pub fn reduction_percentage(&self) -> f64 {
        if self.bytes_before == 0 {
            return 0.0;
        }

        (self.saved_bytes() as f64 / self.bytes_before as f64) * 100.0
    }
}

impl fmt::Display for TransformStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GLSL: {} literal(s), {:.1}% reduction ({} → {} bytes, saved {})",
            self.literals_minified,
            self.reduction_percentage(),
            self.bytes_before,
            self.bytes_after,
            self.saved_bytes()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_merge() {
        let mut stats = TransformStats::default();
        stats.record(&LiteralEdit {
            segments: 1,
            holes: 0,
            bytes_before: 100,
            bytes_after: 60,
        });

        let mut total = TransformStats::default();
        total.merge(&stats);
        total.merge(&stats);

        assert_eq!(total.literals_minified, 2);
        assert_eq!(total.saved_bytes(), 80);
        assert!((total.reduction_percentage() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats_display() {
        let stats = TransformStats::default();
        assert_eq!(stats.reduction_percentage(), 0.0);
        assert!(stats.to_string().contains("0 literal(s)"));
    }
}
