use crate::cli::Args;
use crate::error::RenderError;
use std::path::PathBuf;

pub const MAX_BOUNCES: u32 = 6;

pub const JITTER_GRID: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct DepthOutput {
    pub path: PathBuf,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_bounces: u32,
    pub shadows: bool,
    pub jitter: bool,
    pub filter: bool,
    pub seed: u64,
    pub depth: Option<DepthOutput>,
    pub normals: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            max_bounces: 4,
            shadows: false,
            jitter: false,
            filter: false,
            seed: 0,
            depth: None,
            normals: None,
        }
    }
}

impl RenderConfig {
    pub fn supersampling(&self) -> u32 {
        if self.jitter { JITTER_GRID } else { 1 }
    }
}

impl TryFrom<&Args> for RenderConfig {
    type Error = RenderError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        if args.width == 0 || args.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: args.width,
                height: args.height,
            });
        }

        let depth = match &args.depth {
            Some(path) => {
                if args.depth_min.partial_cmp(&args.depth_max) != Some(std::cmp::Ordering::Less) {
                    return Err(RenderError::InvalidDepthRange {
                        min: args.depth_min,
                        max: args.depth_max,
                    });
                }
                Some(DepthOutput {
                    path: path.clone(),
                    min: args.depth_min,
                    max: args.depth_max,
                })
            }
            None => None,
        };

        Ok(Self {
            width: args.width,
            height: args.height,
            max_bounces: args.bounces.min(MAX_BOUNCES),
            shadows: args.shadows,
            jitter: args.jitter,
            filter: args.filter,
            seed: args.seed,
            depth,
            normals: args.normals.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["whitted_tracer"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_are_valid() {
        let config = RenderConfig::try_from(&parse(&[])).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.supersampling(), 1);
    }

    #[test]
    fn bounces_are_clamped() {
        let config = RenderConfig::try_from(&parse(&["--bounces", "40"])).unwrap();
        assert_eq!(config.max_bounces, MAX_BOUNCES);
    }

    #[test]
    fn flags_carry_through() {
        let args = parse(&["--shadows", "--jitter", "--filter", "--seed", "7", "--normals", "n.ppm"]);
        let config = RenderConfig::try_from(&args).unwrap();
        assert!(config.shadows && config.jitter && config.filter);
        assert_eq!(config.seed, 7);
        assert_eq!(config.supersampling(), JITTER_GRID);
        assert_eq!(config.normals, Some(PathBuf::from("n.ppm")));
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = RenderConfig::try_from(&parse(&["--width", "0"])).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimensions { width: 0, .. }));
    }

    #[test]
    fn empty_depth_range_is_rejected() {
        let args = parse(&["--depth", "d.ppm", "--depth-min", "5", "--depth-max", "5"]);
        let err = RenderConfig::try_from(&args).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDepthRange { .. }));
    }
}
