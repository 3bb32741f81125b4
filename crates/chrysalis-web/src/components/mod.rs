//! Reusable view components

pub mod brand;
pub mod doctor_table;
pub mod feedback;
pub mod login_card;
pub mod patient_card;
pub mod patients_panel;
pub mod stats_grid;
pub mod top_bar;

pub use brand::Brand;
pub use doctor_table::DoctorTable;
pub use feedback::{Feedback, LOADING_MESSAGE};
pub use login_card::LoginCard;
pub use patient_card::PatientCard;
pub use patients_panel::PatientsPanel;
pub use stats_grid::StatsGrid;
pub use top_bar::AdminTopBar;
