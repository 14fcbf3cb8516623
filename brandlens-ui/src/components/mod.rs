pub mod color_card;
pub mod report_view;
pub mod upload_panel;

pub use color_card::ColorCard;
pub use report_view::ReportView;
pub use upload_panel::UploadPanel;
