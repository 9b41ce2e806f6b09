pub mod shared {
    pub mod core {
        pub mod clock;
    }
    pub mod infrastructure {
        pub mod document_store;
        pub mod ticker;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod clock_face;
            pub mod edit_buffer;
            pub mod external_record;
            pub mod invalid_operation;
            pub mod pomodoro;
            pub mod ports;
            pub mod report;
            pub mod stopwatch;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod timer_error;
            pub mod sync_time_entries {
                pub mod entry_store;
                pub mod subscription;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod track_with_stopwatch {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod track_with_pomodoro {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod edit_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                }
            }
            pub mod report_time_per_task {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
