pub mod app_state;
pub mod clock;
pub mod recording_time_entries;
pub mod time_entries;
