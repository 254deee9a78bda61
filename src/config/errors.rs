use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroWindowSize { width: u32, height: u32 },
    NonPositiveZoom(f64),
    ZoomFactorTooSmall(f64),
    IterationsFactorTooSmall(f64),
    InvalidRatioBounds { zoom_in_max: f64, zoom_out_max: f64 },
    InvalidIterationBounds { min: u32, max: u32 },
    InitialIterationsOutOfBounds { iterations: u32, min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindowSize { width, height } => {
                write!(f, "window size must be positive: {}x{}", width, height)
            }
            Self::NonPositiveZoom(zoom) => {
                write!(f, "zoom must be positive and finite, got {}", zoom)
            }
            Self::ZoomFactorTooSmall(factor) => {
                write!(f, "zoom factor must be greater than 1, got {}", factor)
            }
            Self::IterationsFactorTooSmall(factor) => {
                write!(f, "iterations factor must be greater than 1, got {}", factor)
            }
            Self::InvalidRatioBounds {
                zoom_in_max,
                zoom_out_max,
            } => {
                write!(
                    f,
                    "ratio bounds must satisfy 0 < zoom_in_max <= zoom_out_max, got {} and {}",
                    zoom_in_max, zoom_out_max
                )
            }
            Self::InvalidIterationBounds { min, max } => {
                write!(
                    f,
                    "iteration bounds must satisfy 0 < min <= max, got {} and {}",
                    min, max
                )
            }
            Self::InitialIterationsOutOfBounds {
                iterations,
                min,
                max,
            } => {
                write!(
                    f,
                    "initial iterations {} outside bounds [{}, {}]",
                    iterations, min, max
                )
            }
        }
    }
}

impl Error for ConfigError {}
