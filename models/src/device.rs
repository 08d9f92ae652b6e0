//! Compute device selection.

use std::fmt;

/// Caller preference for where model bundles are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DevicePreference {
    /// Use the accelerator when one is visible, else fall back to CPU.
    #[default]
    Auto,
    /// Require the accelerator.
    Accelerator,
    /// Stay on CPU.
    Cpu,
}

/// Compute device a model bundle is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Cpu,
    Cuda(u32),
}

impl Device {
    /// Selects the device for a bundle.
    ///
    /// The decision is made once per bundle construction and never
    /// re-evaluated mid-run.
    pub fn select(preference: DevicePreference) -> Self {
        match preference {
            DevicePreference::Cpu => Device::Cpu,
            DevicePreference::Accelerator => Device::Cuda(0),
            DevicePreference::Auto => {
                if cuda_visible() {
                    Device::Cuda(0)
                } else {
                    Device::Cpu
                }
            }
        }
    }
}

fn cuda_visible() -> bool {
    std::env::var("CUDA_VISIBLE_DEVICES")
        .map(|v| !v.is_empty() && v != "-1")
        .unwrap_or(false)
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu"),
            Device::Cuda(index) => write!(f, "cuda:{index}"),
        }
    }
}

#[cfg(test)]
mod device_tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Device::Cpu.to_string(), "cpu");
        assert_eq!(Device::Cuda(0).to_string(), "cuda:0");
    }

    #[test]
    fn test_explicit_preferences() {
        assert_eq!(Device::select(DevicePreference::Cpu), Device::Cpu);
        assert_eq!(
            Device::select(DevicePreference::Accelerator),
            Device::Cuda(0)
        );
    }
}
