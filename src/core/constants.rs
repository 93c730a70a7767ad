// Static fixture values shared by the factory, validators and tests.

// ========================================
// Credentials (defaults, overridable via env)
// ========================================

/// Default admin username accepted by the booking service
pub const DEFAULT_AUTH_USERNAME: &str = "admin";

/// Default admin password accepted by the booking service
pub const DEFAULT_AUTH_PASSWORD: &str = "password123";

/// Username used for negative authentication tests
pub const DEFAULT_INVALID_USERNAME: &str = "invaliduser";

/// Password used for negative authentication tests
pub const DEFAULT_INVALID_PASSWORD: &str = "wrongpassword";

// ========================================
// Dates
// ========================================

/// Human-readable form of the date format used on the wire
pub const API_DATE_PATTERN: &str = "CCYY-MM-DD";

/// Checkin lands within this many days from today
pub const CHECKIN_WINDOW_DAYS: i64 = 90;

/// Checkout lands within this many days after checkin
pub const STAY_WINDOW_DAYS: i64 = 14;

/// Past checkins land within this many days before today
pub const PAST_WINDOW_DAYS: i64 = 365;

/// Stays generated in the past last at most this many days
pub const PAST_STAY_WINDOW_DAYS: i64 = 7;

/// Future checkins for inverted stays land within this many days
pub const FUTURE_WINDOW_DAYS: i64 = 365;

/// Inverted stays check out up to this many days before checkin
pub const INVERTED_STAY_WINDOW_DAYS: i64 = 30;

// ========================================
// Guests
// ========================================

/// Guest name pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guest {
    pub firstname: &'static str,
    pub lastname: &'static str,
}

pub const GUEST_STANDARD: Guest = Guest {
    firstname: "John",
    lastname: "Doe",
};

pub const GUEST_ALTERNATIVE: Guest = Guest {
    firstname: "Jane",
    lastname: "Smith",
};

pub const GUEST_SPECIAL_CHARS: Guest = Guest {
    firstname: "José",
    lastname: "O'Brien-Smith",
};

/// Pool of first names the factory draws from
pub const FIRST_NAMES: &[&str] = &[
    "Amelia", "Benjamin", "Chloe", "Daniel", "Elena", "Felix", "Grace", "Hugo", "Isla", "Jonas",
    "Kira", "Liam", "Maya", "Noah", "Olivia", "Pablo", "Quinn", "Rosa", "Samuel", "Tara",
];

/// Pool of last names the factory draws from
pub const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Castillo", "Dubois", "Evans", "Fischer", "Garcia", "Hughes", "Ivanova",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Patel", "Rossi", "Schmidt",
    "Tanaka", "Walker",
];

// ========================================
// Prices
// ========================================

pub const PRICE_MIN: i64 = 1;
pub const PRICE_MAX: i64 = 10_000;
pub const PRICE_STANDARD: i64 = 100;
pub const PRICE_PREMIUM: i64 = 500;

// ========================================
// Additional needs
// ========================================

pub const ADDITIONAL_NEEDS: &[&str] = &[
    "Breakfast",
    "Lunch",
    "Dinner",
    "Late checkout",
    "Early checkin",
    "Airport shuttle",
    "Baby cot",
    "Wheelchair access",
    "Pet friendly",
    "None",
];

// ========================================
// Identifiers
// ========================================

/// Booking id that the public service never allocates
pub const NON_EXISTENT_BOOKING_ID: i64 = 9_999_999;

/// Largest integer a JavaScript backend can represent exactly
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;
