//! Login request handler.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{LoginOutcome, LoginRequest, LoginResponse, UserId};
use crate::domain::ports::{
    FormSource, LoginTransport, Navigator, Notifier, PASSWORD_FIELD, USERNAME_FIELD,
};
use crate::error::LoginError;

/// Shown when the portal rejects a login without saying why.
pub const DEFAULT_REJECTION_MESSAGE: &str = "Login failed";

/// Role that is sent to the admin dashboard instead of the caseworker one.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Pages the user lands on after a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRoutes {
    pub dashboard_path: String,
    pub admin_dashboard_path: String,
}

impl LoginRoutes {
    /// Picks the landing page for a role. Anything but `ADMIN` gets the caseworker dashboard.
    pub fn target_for(&self, role: Option<&str>) -> &str {
        match role {
            Some(role) if role.eq_ignore_ascii_case(ADMIN_ROLE) => &self.admin_dashboard_path,
            _ => &self.dashboard_path,
        }
    }
}

impl Default for LoginRoutes {
    fn default() -> Self {
        Self {
            dashboard_path: "/dashboard".to_string(),
            admin_dashboard_path: "/admin-dashboard".to_string(),
        }
    }
}

/// How a single login invocation ended.
#[derive(Debug)]
pub enum LoginSettlement {
    /// Credentials accepted; the user was greeted and sent to `target`.
    Accepted {
        id: UserId,
        name: String,
        target: String,
    },
    /// Credentials rejected; `message` was shown to the user.
    Rejected { message: String },
    /// The request or its response failed. Only the diagnostic log saw it.
    Failed(LoginError),
}

impl LoginSettlement {
    /// Process exit status for the command-line client: 0 accepted, 1 rejected, 2 failed.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Accepted { .. } => 0,
            Self::Rejected { .. } => 1,
            Self::Failed(_) => 2,
        }
    }
}

/// Handles a login attempt from form to landing page.
///
/// Reads the `username` and `password` fields, posts them once through the
/// transport and reacts to the verdict:
///
/// - accepted: blocking greeting, then navigation to the dashboard
/// - rejected: blocking alert with the portal's message, no navigation
/// - transport or parse failure: logged at `ERROR`, nothing shown
///
/// No retries, no timeout, no cancellation. Overlapping invocations are not
/// coordinated; each one settles on its own.
pub struct LoginService<F, T, N, V> {
    form: Arc<F>,
    transport: Arc<T>,
    notifier: Arc<N>,
    navigator: Arc<V>,
    routes: Arc<LoginRoutes>,
}

impl<F, T, N, V> Clone for LoginService<F, T, N, V> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            transport: self.transport.clone(),
            notifier: self.notifier.clone(),
            navigator: self.navigator.clone(),
            routes: self.routes.clone(),
        }
    }
}

impl<F, T, N, V> LoginService<F, T, N, V>
where
    F: FormSource,
    T: LoginTransport,
    N: Notifier,
    V: Navigator,
{
    /// Creates a new login service.
    pub fn new(
        form: Arc<F>,
        transport: Arc<T>,
        notifier: Arc<N>,
        navigator: Arc<V>,
        routes: LoginRoutes,
    ) -> Self {
        Self {
            form,
            transport,
            notifier,
            navigator,
            routes: Arc::new(routes),
        }
    }

    /// Builds a request from the current form values.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Form`] if either field cannot be read.
    pub fn read_request(&self) -> Result<LoginRequest, LoginError> {
        let username = self.form.field_value(USERNAME_FIELD)?;
        let password = self.form.field_value(PASSWORD_FIELD)?;
        Ok(LoginRequest::new(username, password))
    }

    /// Runs one login invocation and waits for it to settle.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Form`] if the form cannot be read; nothing is sent
    /// in that case. Every later failure is reported as
    /// [`LoginSettlement::Failed`] instead.
    pub async fn submit(&self) -> Result<LoginSettlement, LoginError> {
        let request = self.read_request()?;
        Ok(self.settle(request).await)
    }

    /// Sends `request` and reacts to whatever comes back.
    pub async fn settle(&self, request: LoginRequest) -> LoginSettlement {
        debug!(username = %request.username, "Sending login request");

        let outcome = self
            .transport
            .post_login(&request)
            .await
            .and_then(LoginResponse::into_outcome);

        match outcome {
            Ok(LoginOutcome::Accepted { id, name, role }) => {
                let name = name.unwrap_or(request.username);
                self.notifier
                    .alert(&format!("Login successful! Welcome {}", name));

                let target = self.routes.target_for(role.as_deref()).to_string();
                info!(user_id = %id, landing = %target, "Login accepted");
                self.navigator.navigate(&target);

                LoginSettlement::Accepted { id, name, target }
            }
            Ok(LoginOutcome::Rejected { message }) => {
                let message = message.unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_string());
                warn!(username = %request.username, reason = %message, "Login rejected");
                self.notifier.alert(&message);

                LoginSettlement::Rejected { message }
            }
            Err(e) => {
                error!(error = %e, "Login request failed");
                LoginSettlement::Failed(e)
            }
        }
    }
}

impl<F, T, N, V> LoginService<F, T, N, V>
where
    F: FormSource + 'static,
    T: LoginTransport + 'static,
    N: Notifier + 'static,
    V: Navigator + 'static,
{
    /// Fire-and-forget invocation.
    ///
    /// Reads the form right away, then hands the request and the reaction to
    /// a spawned task and returns immediately. Must be called inside a tokio
    /// runtime. The handle can be awaited, or dropped to let the task finish
    /// in the background.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Form`] if the form cannot be read.
    pub fn dispatch(&self) -> Result<JoinHandle<LoginSettlement>, LoginError> {
        let request = self.read_request()?;
        let service = self.clone();
        Ok(tokio::spawn(async move { service.settle(request).await }))
    }
}
