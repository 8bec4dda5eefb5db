//! UI Components
//!
//! Reusable Leptos components.

mod apply_form;
mod cv_list;
mod interview_scheduler;
mod pagination;
mod recruiter_table;
mod salary_slider;
mod verify_actions;

pub use apply_form::ApplyForm;
pub use cv_list::CvList;
pub use interview_scheduler::InterviewScheduler;
pub use pagination::Pagination;
pub use recruiter_table::RecruiterTable;
pub use salary_slider::SalarySlider;
pub use verify_actions::VerifyActions;
