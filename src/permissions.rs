//! Permission bitmask shared with the server.
//!
//! Checks here gate UI affordances only; the server enforces
//! authoritatively on every request.

pub const PERM_READ: i32 = 1;
pub const PERM_WRITE: i32 = 2;
pub const PERM_ADMIN: i32 = 4;

/// Every new account starts with read + write.
pub const PERM_DEFAULT: i32 = PERM_READ | PERM_WRITE;

/// True iff every bit set in `required` is also set in `mask`.
pub fn has_permission(mask: i32, required: i32) -> bool {
    mask & required == required
}

/// Human-readable bit names, for the profile view.
pub fn describe(mask: i32) -> String {
    let mut names = Vec::new();
    if has_permission(mask, PERM_READ) {
        names.push("read");
    }
    if has_permission(mask, PERM_WRITE) {
        names.push("write");
    }
    if has_permission(mask, PERM_ADMIN) {
        names.push("admin");
    }
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
