//! Simulated back end: every call waits a fixed delay and then succeeds,
//! except a manual sign-in with an empty username or password.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::Delays;
use crate::domain::{AuthService, Credentials, Delay, Error, TransferRequest, TransferService};

/// Real elapsed time on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Resolves immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantDelay;

impl Delay for InstantDelay {
    async fn sleep(&self, _duration: Duration) {}
}

#[derive(Debug, Clone)]
pub struct SimulatedBank<D: Delay> {
    delay: D,
    delays: Delays,
}

impl<D: Delay> SimulatedBank<D> {
    pub fn new(delay: D, delays: Delays) -> Self {
        Self { delay, delays }
    }
}

impl SimulatedBank<InstantDelay> {
    pub fn instant() -> Self {
        Self::new(InstantDelay, Delays::none())
    }
}

impl<D: Delay> AuthService for SimulatedBank<D> {
    async fn restore(&self, stored: bool) -> bool {
        self.delay.sleep(self.delays.session_check).await;
        debug!(stored, "session check finished");
        stored
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        self.delay.sleep(self.delays.login).await;

        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(Error::AuthenticationFailed);
        }
        info!(user = %credentials.username, "signed in");
        Ok(())
    }

    async fn biometric(&self) -> Result<(), Error> {
        self.delay.sleep(self.delays.biometric_scan).await;
        self.delay.sleep(self.delays.biometric_handoff).await;
        info!("signed in with biometrics");
        Ok(())
    }
}

impl<D: Delay> TransferService for SimulatedBank<D> {
    async fn submit(&self, request: &TransferRequest) -> Result<(), Error> {
        self.delay.sleep(self.delays.transfer).await;
        info!(
            kind = request.kind.title(),
            from = request.from_account,
            amount = %request.amount,
            "transfer accepted"
        );
        Ok(())
    }
}
