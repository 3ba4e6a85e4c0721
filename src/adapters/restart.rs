//! System restart adapter.
//!
//! The domain core only ever reports that a restart is required; this
//! adapter performs it. On ESP-IDF that is a full chip reset, on the host
//! the process exits with a non-zero status so a supervisor can relaunch it.

use log::error;

use crate::app::ports::RestartPort;

pub struct SystemRestart;

impl SystemRestart {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRestart {
    fn default() -> Self {
        Self::new()
    }
}

impl RestartPort for SystemRestart {
    #[cfg(feature = "espidf")]
    fn restart(&mut self) -> ! {
        error!("Restarting device now");
        unsafe { esp_idf_svc::sys::esp_restart() };
        unreachable!("esp_restart does not return")
    }

    #[cfg(not(feature = "espidf"))]
    fn restart(&mut self) -> ! {
        error!("Restart requested, exiting process");
        std::process::exit(1)
    }
}
