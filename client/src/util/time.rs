//! Timestamps and identifiers for transcript entries.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current local time formatted for a message header.
pub fn display_time() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_time_string("default"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Fresh unique id for a transcript entry.
pub fn new_message_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
