pub(crate) mod space_report_service;
