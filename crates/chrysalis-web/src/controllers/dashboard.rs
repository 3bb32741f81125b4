//! Dashboard page controller
//!
//! Owns the selection, loading and error state of the dashboard page. The
//! selection is read from the URL once at mount and written back in place on
//! every change. Loads are sequenced with [`LoadTicket`]s so a slow response
//! never overwrites a newer one, and nothing is applied after unmount.

use crate::api_client::{AdminApi, ApiOutcome};
use crate::controllers::ticket::{LoadTicket, RequestSequence};
use crate::navigation::SharedNavigator;
use crate::state::AppState;
use chrysalis_core::{
    DashboardData, DashboardSummary, Doctor, DoctorProfile, Patient, RoutesConfig, Username,
};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Mutable state of one dashboard page instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    /// A load is in flight
    pub loading: bool,
    /// Message of the last failed load
    pub error: Option<String>,
    /// Last successfully loaded payload
    pub dashboard: Option<DashboardData>,
    /// Username of the selected doctor
    pub selected_doctor: Option<Username>,
}

impl DashboardState {
    /// State right after mount: loading, with the selection from the URL
    pub const fn mounted(selected_doctor: Option<Username>) -> Self {
        Self {
            loading: true,
            error: None,
            dashboard: None,
            selected_doctor,
        }
    }

    /// What the page should render
    pub fn view(&self) -> DashboardView {
        if self.loading {
            return DashboardView::Loading;
        }
        if let Some(error) = &self.error {
            return DashboardView::Failed(error.clone());
        }

        let data = self.dashboard.as_ref();
        let has_selection = self.selected_doctor.is_some();
        let doctor = data
            .and_then(|d| d.selected_doctor.clone())
            .filter(|_| has_selection);
        let patients = data
            .filter(|_| has_selection)
            .map(|d| d.patients.clone())
            .unwrap_or_default();

        DashboardView::Ready(DashboardContent {
            summary: data.and_then(|d| d.summary),
            doctors: data.map(|d| d.doctors.clone()).unwrap_or_default(),
            selected_username: doctor.as_ref().map(|d| d.username.clone()),
            doctor,
            patients,
        })
    }
}

/// Render decision for the dashboard page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    /// Waiting for the backend
    Loading,
    /// The last load failed
    Failed(String),
    /// Data is available
    Ready(DashboardContent),
}

/// Everything the loaded dashboard renders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardContent {
    /// Aggregate counters
    pub summary: Option<DashboardSummary>,
    /// Doctor list
    pub doctors: Vec<Doctor>,
    /// Row to highlight
    pub selected_username: Option<Username>,
    /// Header of the patients panel; `None` shows the selection prompt
    pub doctor: Option<DoctorProfile>,
    /// Patients of the selected doctor
    pub patients: Vec<Patient>,
}

/// Selection after clicking `username`: clicking the selected doctor clears
/// the selection
#[must_use]
pub fn next_selection(current: Option<&str>, username: &str) -> Option<Username> {
    if current == Some(username) {
        None
    } else {
        Some(username.to_string())
    }
}

/// A load that has been started but not yet sent
#[derive(Debug, Clone)]
pub struct LoadRequest {
    ticket: LoadTicket,
    doctor: Option<Username>,
}

impl LoadRequest {
    /// Doctor the load is for
    pub fn doctor(&self) -> Option<&str> {
        self.doctor.as_deref()
    }
}

/// What finishing a load did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadEffect {
    /// The payload was stored
    Loaded,
    /// The error message was stored
    Failed,
    /// The session expired; navigated to the login page
    Redirected,
    /// A newer load or unmount superseded this one; nothing changed
    Stale,
}

impl LoadEffect {
    /// Whether the page state changed and needs re-rendering
    pub const fn changed_state(self) -> bool {
        matches!(self, Self::Loaded | Self::Failed)
    }
}

/// Controller behind the dashboard page
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct DashboardController {
    api: Arc<dyn AdminApi>,
    navigator: SharedNavigator,
    routes: RoutesConfig,
    state: Arc<Mutex<DashboardState>>,
    sequence: RequestSequence,
}

impl DashboardController {
    /// Mount a controller, reading the selection from the URL
    pub fn mount(app: &AppState) -> Self {
        let routes = app.config.routes.clone();
        let selected = app.navigator.query_param(&routes.selection_param);
        debug!("Mounting dashboard with selection {:?}", selected);

        Self {
            api: Arc::clone(&app.api),
            navigator: Arc::clone(&app.navigator),
            routes,
            state: Arc::new(Mutex::new(DashboardState::mounted(selected))),
            sequence: RequestSequence::new(),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    /// Username of the selected doctor
    pub fn selected_doctor(&self) -> Option<Username> {
        self.state.lock().selected_doctor.clone()
    }

    /// Enter the loading state and take a ticket for the current selection
    pub fn begin_load(&self) -> LoadRequest {
        let mut state = self.state.lock();
        state.loading = true;
        state.error = None;

        LoadRequest {
            ticket: self.sequence.issue(),
            doctor: state.selected_doctor.clone(),
        }
    }

    /// Fetch the dashboard for a started load and apply the outcome if the
    /// load is still current
    pub async fn complete_load(&self, request: LoadRequest) -> LoadEffect {
        let outcome = self.api.fetch_dashboard(request.doctor()).await;

        if !request.ticket.is_current() {
            debug!("Discarding dashboard load #{}", request.ticket.id());
            return LoadEffect::Stale;
        }

        match outcome {
            ApiOutcome::AuthRequired => {
                info!("Admin session expired, returning to login");
                self.navigator.assign(&self.routes.login_path);
                LoadEffect::Redirected
            }
            ApiOutcome::Failure(message) => {
                warn!("Dashboard load failed: {}", message);
                let mut state = self.state.lock();
                state.error = Some(message);
                state.loading = false;
                LoadEffect::Failed
            }
            ApiOutcome::Success(data) => {
                info!(
                    "Dashboard loaded: {} doctors, {} patients",
                    data.doctors.len(),
                    data.patients.len()
                );
                let mut state = self.state.lock();
                state.dashboard = Some(data);
                state.error = None;
                state.loading = false;
                LoadEffect::Loaded
            }
        }
    }

    /// Load the dashboard for the current selection
    pub async fn load(&self) -> LoadEffect {
        let request = self.begin_load();
        self.complete_load(request).await
    }

    /// Toggle the selection for a clicked doctor and mirror it into the URL
    ///
    /// Returns the new selection; the caller reloads afterwards.
    pub fn select_doctor(&self, username: &str) -> Option<Username> {
        let next = {
            let mut state = self.state.lock();
            let next = next_selection(state.selected_doctor.as_deref(), username);
            state.selected_doctor.clone_from(&next);
            next
        };

        self.navigator
            .set_query_param(&self.routes.selection_param, next.as_deref());
        debug!("Doctor selection is now {:?}", next);
        next
    }

    /// End the session and return to the login page, whatever the backend
    /// answered
    pub async fn logout(&self) {
        if !self.api.logout().await {
            warn!("Logout did not reach the backend");
        }
        self.navigator.assign(&self.routes.login_path);
    }

    /// Stop applying results of loads still in flight
    pub fn unmount(&self) {
        self.sequence.cancel();
    }
}

impl fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardController")
            .field("routes", &self.routes)
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::missing_panics_doc,
    clippy::unwrap_used,
    clippy::panic,
    clippy::significant_drop_tightening
)]
mod tests {
    use super::*;
    use crate::navigation::MemoryNavigator;
    use async_trait::async_trait;
    use chrysalis_core::Config;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Scripted backend answering loads in order
    #[derive(Default)]
    struct ScriptedApi {
        outcomes: Mutex<VecDeque<ApiOutcome<DashboardData>>>,
        requested: Mutex<Vec<Option<String>>>,
        logouts: Mutex<usize>,
    }

    impl ScriptedApi {
        fn with(outcomes: Vec<ApiOutcome<DashboardData>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl AdminApi for ScriptedApi {
        async fn login(&self, _username: &str, _password: &str) -> ApiOutcome<()> {
            ApiOutcome::Success(())
        }

        async fn fetch_dashboard(&self, doctor: Option<&str>) -> ApiOutcome<DashboardData> {
            self.requested.lock().push(doctor.map(ToString::to_string));
            self.outcomes
                .lock()
                .pop_front()
                .unwrap_or_else(|| ApiOutcome::Failure("exhausted".to_string()))
        }

        async fn logout(&self) -> bool {
            *self.logouts.lock() += 1;
            false
        }
    }

    fn doctor(username: &str) -> Doctor {
        Doctor {
            username: username.to_string(),
            name: format!("Dr {username}"),
            qualifications: "MBBS".to_string(),
            patients: 1,
            status: "Active".to_string(),
        }
    }

    fn payload(selected: Option<&str>) -> DashboardData {
        DashboardData {
            ok: true,
            error: None,
            summary: Some(DashboardSummary {
                total_doctors: 2,
                active_doctors: 2,
                total_patients: 2,
            }),
            doctors: vec![doctor("drgrey"), doctor("drshep")],
            // The backend falls back to the first doctor without a selection
            selected_doctor: Some(DoctorProfile {
                username: selected.unwrap_or("drgrey").to_string(),
                name: "Dr".to_string(),
                qualifications: "MBBS".to_string(),
            }),
            patients: Vec::new(),
        }
    }

    fn controller(
        location: &str,
        outcomes: Vec<ApiOutcome<DashboardData>>,
    ) -> (DashboardController, Arc<ScriptedApi>, MemoryNavigator) {
        let api = Arc::new(ScriptedApi::with(outcomes));
        let navigator = MemoryNavigator::new(location).unwrap();
        let app = AppState {
            config: Arc::new(Config::default()),
            api: api.clone(),
            navigator: Arc::new(navigator.clone()),
        };
        (DashboardController::mount(&app), api, navigator)
    }

    #[test]
    fn test_mount_reads_selection_and_starts_loading() {
        let (controller, _, _) = controller("/admin?doctor=drshep", vec![]);
        let state = controller.snapshot();

        assert!(state.loading);
        assert_eq!(state.selected_doctor.as_deref(), Some("drshep"));
        assert_eq!(state.view(), DashboardView::Loading);
    }

    #[tokio::test]
    async fn test_successful_load_stores_payload() {
        let (controller, api, _) = controller(
            "/admin?doctor=drshep",
            vec![ApiOutcome::Success(payload(Some("drshep")))],
        );

        assert_eq!(controller.load().await, LoadEffect::Loaded);

        let state = controller.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(api.requested.lock().clone(), vec![Some("drshep".to_string())]);

        let DashboardView::Ready(content) = state.view() else {
            panic!("expected ready view");
        };
        assert_eq!(content.selected_username.as_deref(), Some("drshep"));
        assert_eq!(content.doctors.len(), 2);
    }

    #[tokio::test]
    async fn test_no_selection_hides_backend_default_doctor() {
        let (controller, _, _) = controller("/admin", vec![ApiOutcome::Success(payload(None))]);
        controller.load().await;

        let DashboardView::Ready(content) = controller.snapshot().view() else {
            panic!("expected ready view");
        };
        assert_eq!(content.doctor, None);
        assert_eq!(content.selected_username, None);
        assert!(content.patients.is_empty());
        assert!(content.summary.is_some());
    }

    #[tokio::test]
    async fn test_failure_stores_message() {
        let (controller, _, _) = controller(
            "/admin",
            vec![ApiOutcome::Failure("Failed to load dashboard.".to_string())],
        );

        assert_eq!(controller.load().await, LoadEffect::Failed);

        let state = controller.snapshot();
        assert!(!state.loading);
        assert_eq!(
            state.view(),
            DashboardView::Failed("Failed to load dashboard.".to_string())
        );
    }

    #[tokio::test]
    async fn test_auth_required_redirects_without_state_change() {
        let (controller, _, navigator) = controller("/admin", vec![ApiOutcome::AuthRequired]);

        assert_eq!(controller.load().await, LoadEffect::Redirected);
        assert_eq!(navigator.last_assigned().as_deref(), Some("/admin/login"));

        let state = controller.snapshot();
        assert!(state.dashboard.is_none());
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_error_cleared_when_next_load_starts() {
        let (controller, _, _) = controller(
            "/admin",
            vec![
                ApiOutcome::Failure("Network error".to_string()),
                ApiOutcome::Success(payload(None)),
            ],
        );

        controller.load().await;
        controller.begin_load();
        assert_eq!(controller.snapshot().error, None);
    }

    #[tokio::test]
    async fn test_stale_result_is_discarded() {
        // Outcomes are handed out in the order requests reach the backend
        let (controller, api, _) = controller(
            "/admin?doctor=drgrey",
            vec![
                ApiOutcome::Success(payload(Some("drshep"))),
                ApiOutcome::Success(payload(Some("drgrey"))),
            ],
        );

        let first = controller.begin_load();
        controller.select_doctor("drshep");
        let second = controller.begin_load();

        // The older request answers last
        let first_effect = controller.complete_load(first);
        assert_eq!(controller.complete_load(second).await, LoadEffect::Loaded);
        assert_eq!(first_effect.await, LoadEffect::Stale);

        assert_eq!(
            api.requested.lock().clone(),
            vec![Some("drshep".to_string()), Some("drgrey".to_string())]
        );
        let state = controller.snapshot();
        assert_eq!(
            state.dashboard.unwrap().selected_doctor.unwrap().username,
            "drshep"
        );
    }

    #[tokio::test]
    async fn test_unmount_ignores_in_flight_results() {
        let (controller, _, navigator) = controller("/admin", vec![ApiOutcome::AuthRequired]);

        let request = controller.begin_load();
        controller.unmount();

        assert_eq!(controller.complete_load(request).await, LoadEffect::Stale);
        assert!(navigator.assigned().is_empty());
        assert!(controller.snapshot().loading);
    }

    #[test]
    fn test_select_toggles_and_syncs_url() {
        let (controller, _, navigator) = controller("/admin", vec![]);

        assert_eq!(controller.select_doctor("drgrey").as_deref(), Some("drgrey"));
        assert_eq!(navigator.location(), "/admin?doctor=drgrey");

        assert_eq!(controller.select_doctor("drshep").as_deref(), Some("drshep"));
        assert_eq!(navigator.location(), "/admin?doctor=drshep");

        assert_eq!(controller.select_doctor("drshep"), None);
        assert_eq!(navigator.location(), "/admin");
        assert_eq!(controller.selected_doctor(), None);
    }

    #[tokio::test]
    async fn test_logout_redirects_even_when_unreachable() {
        let (controller, api, navigator) = controller("/admin", vec![]);

        controller.logout().await;

        assert_eq!(*api.logouts.lock(), 1);
        assert_eq!(navigator.last_assigned().as_deref(), Some("/admin/login"));
    }

    #[test]
    fn test_changed_state() {
        assert!(LoadEffect::Loaded.changed_state());
        assert!(LoadEffect::Failed.changed_state());
        assert!(!LoadEffect::Redirected.changed_state());
        assert!(!LoadEffect::Stale.changed_state());
    }

    #[test]
    fn test_clicking_selected_doctor_clears() {
        assert_eq!(next_selection(Some("drgrey"), "drgrey"), None);
        assert_eq!(
            next_selection(None, "drgrey").as_deref(),
            Some("drgrey")
        );
    }

    proptest! {
        #[test]
        fn prop_selecting_twice_clears(current in proptest::option::of("[a-z]{1,8}"), username in "[a-z]{1,8}") {
            prop_assume!(current.as_deref() != Some(username.as_str()));

            let once = next_selection(current.as_deref(), &username);
            prop_assert_eq!(once.as_deref(), Some(username.as_str()));

            let twice = next_selection(once.as_deref(), &username);
            prop_assert_eq!(twice, None);
        }
    }
}
