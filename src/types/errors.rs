use std::fmt;

// === StoreError ===

/// Errors surfaced by the persistence backends.
#[derive(Debug)]
pub enum StoreError {
    /// Record with the given ID was not found.
    NotFound(String),
    /// An I/O error occurred while reading or writing the snapshot.
    Io(String),
    /// Failed to serialize or deserialize stored data.
    Serialization(String),
    /// A network error occurred while talking to the remote document store.
    Network(String),
    /// The remote backend rejected the request (raw provider message).
    Backend(String),
    /// The operation requires a signed-in user.
    NotSignedIn,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Record not found: {}", id),
            StoreError::Io(msg) => write!(f, "Store I/O error: {}", msg),
            StoreError::Serialization(msg) => write!(f, "Store serialization error: {}", msg),
            StoreError::Network(msg) => write!(f, "Store network error: {}", msg),
            StoreError::Backend(msg) => write!(f, "Store backend error: {}", msg),
            StoreError::NotSignedIn => write!(f, "No user is signed in"),
        }
    }
}

impl std::error::Error for StoreError {}

// === DomainError ===

/// Errors related to domain record operations.
#[derive(Debug)]
pub enum DomainError {
    /// A mandatory form field was empty.
    MissingField(String),
    /// A price field did not parse as a number.
    InvalidPrice(String),
    /// The renewal or purchase date was not a valid YYYY-MM-DD date.
    InvalidDate(String),
    /// Domain with the given ID was not found.
    NotFound(String),
    /// Deletion was attempted without prior confirmation.
    ConfirmationRequired,
    /// The persistence backend failed.
    Store(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::MissingField(field) => {
                write!(f, "Please fill in all required fields: missing {}", field)
            }
            DomainError::InvalidPrice(value) => write!(f, "Invalid price: {}", value),
            DomainError::InvalidDate(value) => write!(f, "Invalid date: {}", value),
            DomainError::NotFound(id) => write!(f, "Domain not found: {}", id),
            DomainError::ConfirmationRequired => {
                write!(f, "Deleting a domain requires confirmation")
            }
            DomainError::Store(msg) => write!(f, "Domain store error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// === ProviderError ===

/// Errors related to provider record operations.
#[derive(Debug)]
pub enum ProviderError {
    /// A mandatory form field was empty.
    MissingField(String),
    /// Provider with the given ID was not found.
    NotFound(String),
    /// Deletion was attempted without prior confirmation. Carries the number
    /// of domains still referencing this provider.
    ConfirmationRequired(usize),
    /// The persistence backend failed.
    Store(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::MissingField(field) => {
                write!(f, "Please fill in all required fields: missing {}", field)
            }
            ProviderError::NotFound(id) => write!(f, "Provider not found: {}", id),
            ProviderError::ConfirmationRequired(count) => write!(
                f,
                "This provider has {} domains. Deleting it requires confirmation",
                count
            ),
            ProviderError::Store(msg) => write!(f, "Provider store error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

// === AuthError ===

/// Errors related to the sign-in gate.
#[derive(Debug)]
pub enum AuthError {
    /// The auth provider rejected the credentials (raw provider message).
    InvalidCredentials(String),
    /// A network error occurred while contacting the auth endpoint.
    Network(String),
    /// The operation requires a signed-in user.
    NotSignedIn,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials(msg) => write!(f, "{}", msg),
            AuthError::Network(msg) => write!(f, "Auth network error: {}", msg),
            AuthError::NotSignedIn => write!(f, "No user is signed in"),
        }
    }
}

impl std::error::Error for AuthError {}

// === LookupError ===

/// Errors related to DNS/WHOIS lookups.
#[derive(Debug)]
pub enum LookupError {
    /// No domain name was provided.
    EmptyDomain,
    /// The live resolver failed.
    Resolution(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::EmptyDomain => write!(f, "Please enter a domain name"),
            LookupError::Resolution(msg) => write!(f, "DNS resolution failed: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

// === ExportError ===

/// Errors related to calendar export.
#[derive(Debug)]
pub enum ExportError {
    /// The portfolio has no domains to export.
    NothingToExport,
    /// A renewal date could not be parsed into an event timestamp.
    InvalidDate(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NothingToExport => write!(f, "No domains to export"),
            ExportError::InvalidDate(value) => write!(f, "Invalid renewal date: {}", value),
        }
    }
}

impl std::error::Error for ExportError {}

// === SettingsError ===

/// Errors related to user settings.
#[derive(Debug)]
pub enum SettingsError {
    /// The provided settings value is invalid.
    InvalidValue(String),
    /// The persistence backend failed.
    Store(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidValue(msg) => write!(f, "Invalid settings value: {}", msg),
            SettingsError::Store(msg) => write!(f, "Settings store error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

// === LocaleError ===

/// Errors related to localization engine operations.
#[derive(Debug)]
pub enum LocaleError {
    /// The requested locale is not supported.
    UnsupportedLocale(String),
    /// The locale file was not found.
    FileNotFound(String),
    /// The locale file was not valid JSON.
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnsupportedLocale(locale) => {
                write!(f, "Unsupported locale: {}", locale)
            }
            LocaleError::FileNotFound(path) => write!(f, "Locale file not found: {}", path),
            LocaleError::ParseError(msg) => write!(f, "Locale parse error: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

// === ThemeError ===

/// Errors related to theme engine operations.
#[derive(Debug)]
pub enum ThemeError {
    /// The provided color value is invalid.
    InvalidColor(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidColor(color) => write!(f, "Invalid color: {}", color),
        }
    }
}

impl std::error::Error for ThemeError {}
