use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_u8(name: &str, default: u8) -> u8 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_CELLS: OnceLock<usize> = OnceLock::new();

/// Grids with at least this many active cells are rasterized with rayon.
pub(crate) fn parallel_min_cells() -> usize {
    *PARALLEL_MIN_CELLS.get_or_init(|| parse_env_usize("BITGRID_PARALLEL_MIN_CELLS", 65_536).max(1))
}

static LUMA_THRESHOLD: OnceLock<u8> = OnceLock::new();

/// Default luma level at or above which a pixel imports as a set cell.
pub(crate) fn luma_threshold() -> u8 {
    *LUMA_THRESHOLD.get_or_init(|| parse_env_u8("BITGRID_LUMA_THRESHOLD", 128).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_falls_back_to_default() {
        assert_eq!(parse_env_usize("BITGRID_TEST_UNSET_VARIABLE", 7), 7);
        assert_eq!(parse_env_u8("BITGRID_TEST_UNSET_VARIABLE", 9), 9);
    }

    #[test]
    fn test_knobs_are_positive() {
        assert!(parallel_min_cells() >= 1);
        assert!(luma_threshold() >= 1);
    }
}
