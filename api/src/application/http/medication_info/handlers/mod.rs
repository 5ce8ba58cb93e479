pub mod get_max_dosage_info;
pub mod get_medication_info;
