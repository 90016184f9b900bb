//! Shared hardware locks
//!
//! The ADC and the PWM/DAC configuration path can be reached from both
//! cores and from interrupt handlers. Each gets a mutex that is taken for
//! one transaction only, and never waited on: if it is already held the
//! operation is skipped.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

use crate::error::Error;

/// Hardware resource guarded by a lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resource {
    /// Analog-to-digital conversion (native and external ADC)
    Adc,
    /// PWM and DAC output configuration
    Pwm,
}

/// Locks for the shared hardware resources
///
/// Usually placed in a `static` so every context sees the same instance:
///
/// ```ignore
/// static LOCKS: HardwareLocks<CriticalSectionRawMutex> = HardwareLocks::new();
/// ```
pub struct HardwareLocks<M: RawMutex> {
    adc: Mutex<M, ()>,
    pwm: Mutex<M, ()>,
}

impl<M: RawMutex> Default for HardwareLocks<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> HardwareLocks<M> {
    /// Create a new set of unlocked locks
    pub const fn new() -> Self {
        Self {
            adc: Mutex::new(()),
            pwm: Mutex::new(()),
        }
    }

    /// Try to take the lock for a resource without waiting
    ///
    /// Returns `Error::Busy` if another context holds it.
    pub fn try_acquire(&self, resource: Resource) -> Result<MutexGuard<'_, M, ()>, Error> {
        let lock = match resource {
            Resource::Adc => &self.adc,
            Resource::Pwm => &self.pwm,
        };
        lock.try_lock().map_err(|_| {
            warn!("{} lock busy, operation skipped", resource);
            Error::Busy(resource)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_acquire_and_release() {
        let locks = HardwareLocks::<NoopRawMutex>::new();

        {
            let _guard = locks.try_acquire(Resource::Adc).unwrap();
            assert_eq!(
                locks.try_acquire(Resource::Adc).err(),
                Some(Error::Busy(Resource::Adc))
            );
            // Independent resources do not block each other
            assert!(locks.try_acquire(Resource::Pwm).is_ok());
        }

        // Released when the guard drops
        assert!(locks.try_acquire(Resource::Adc).is_ok());
    }
}
