pub mod store_profile_dialog;
