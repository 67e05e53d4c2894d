// UI Components
// The clone form, its preview modal, and the icons they share

pub mod clone_form;
pub mod icons;
pub mod preview_modal;

pub use clone_form::CloneForm;
pub use preview_modal::PreviewModal;
