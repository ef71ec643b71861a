//! Pin pool configuration

/// Default number of pins a pool hands out
pub const GPIO_MAX_INSTANCES: usize = 10;

/// Configuration for a [`Gpio`](crate::Gpio) pin pool.
///
/// `max_instances` bounds the number of live pins. A static pool additionally
/// clamps it to its compile-time capacity.
#[derive(Debug, Clone)]
pub struct GpioConfig {
    pub name: &'static str,
    pub max_instances: usize,
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self {
            name: "gpio",
            max_instances: GPIO_MAX_INSTANCES,
        }
    }
}

impl GpioConfig {
    /// Creates a new pool configuration builder.
    pub fn builder() -> GpioConfigBuilder {
        GpioConfigBuilder::default()
    }
}

/// Builder for pool configuration.
#[derive(Debug, Clone, Default)]
pub struct GpioConfigBuilder {
    config: GpioConfig,
}

impl GpioConfigBuilder {
    /// Sets the pool name, used as the log target.
    pub fn name(mut self, name: &'static str) -> Self {
        self.config.name = name;
        self
    }

    /// Sets the maximum number of live pins.
    pub fn max_instances(mut self, max: usize) -> Self {
        self.config.max_instances = max;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> GpioConfig {
        self.config
    }
}
