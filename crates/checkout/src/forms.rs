//! Shipping and payment form data with typed field updates.
//!
//! Form fields are mutated through tagged-union update operations
//! ([`ShippingUpdate`], [`PaymentUpdate`]) rather than stringly-typed field
//! names, so a typo in a field name is a compile error at the boundary.
//!
//! No format validation happens at update time. Completeness - every
//! required field non-empty - is the only guard, evaluated by the session
//! before a forward stage transition. Card number and expiry pass through
//! display masks before being stored.

use serde::{Deserialize, Serialize};

/// Maximum stored length of a masked card number: 16 digits in four
/// space-separated groups.
const CARD_NUMBER_MAX_LEN: usize = 19;

/// Maximum stored length of a masked expiry: `MM/YY`.
const EXPIRY_MAX_LEN: usize = 5;

/// Shipping address form data.
///
/// Created empty at session start and filled field-by-field from user
/// input. The core never persists it; when `save_info` is set, persistence
/// is the profile collaborator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Apartment, suite, etc. Optional - never required by the guard.
    pub address_complement: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub save_info: bool,
}

impl Default for ShippingInfo {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            address_complement: None,
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: "US".to_owned(),
            save_info: false,
        }
    }
}

impl ShippingInfo {
    /// Apply one typed field update.
    pub fn apply(&mut self, update: ShippingUpdate) {
        match update {
            ShippingUpdate::FirstName(v) => self.first_name = v,
            ShippingUpdate::LastName(v) => self.last_name = v,
            ShippingUpdate::Email(v) => self.email = v,
            ShippingUpdate::Phone(v) => self.phone = v,
            ShippingUpdate::Address(v) => self.address = v,
            ShippingUpdate::AddressComplement(v) => self.address_complement = v,
            ShippingUpdate::City(v) => self.city = v,
            ShippingUpdate::State(v) => self.state = v,
            ShippingUpdate::ZipCode(v) => self.zip_code = v,
            ShippingUpdate::Country(v) => self.country = v,
            ShippingUpdate::SaveInfo(v) => self.save_info = v,
        }
    }

    /// Required fields that are still empty.
    ///
    /// Completeness is literal non-emptiness - there is deliberately no
    /// email- or phone-shape validation here.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        let required = [
            (FormField::FirstName, &self.first_name),
            (FormField::LastName, &self.last_name),
            (FormField::Email, &self.email),
            (FormField::Phone, &self.phone),
            (FormField::Address, &self.address),
            (FormField::City, &self.city),
            (FormField::State, &self.state),
            (FormField::ZipCode, &self.zip_code),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect()
    }

    /// Whether every required field is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// One typed update to the shipping form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingUpdate {
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    Address(String),
    AddressComplement(Option<String>),
    City(String),
    State(String),
    ZipCode(String),
    Country(String),
    SaveInfo(bool),
}

/// Payment form data.
///
/// Card fields keep their display-masked shape (see [`mask_card_number`]
/// and [`mask_expiry_date`]). Switching payment methods preserves
/// previously entered card data; it simply stops being required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub save_payment: bool,
    pub method: PaymentMethod,
}

impl PaymentInfo {
    /// Apply one typed field update, masking card number and expiry.
    pub fn apply(&mut self, update: PaymentUpdate) {
        match update {
            PaymentUpdate::CardholderName(v) => self.cardholder_name = v,
            PaymentUpdate::CardNumber(v) => self.card_number = mask_card_number(&v),
            PaymentUpdate::ExpiryDate(v) => self.expiry_date = mask_expiry_date(&v),
            PaymentUpdate::Cvv(v) => self.cvv = v,
            PaymentUpdate::SavePayment(v) => self.save_payment = v,
        }
    }

    /// Required fields that are still empty.
    ///
    /// Only the credit-card method has client-side fields; the other
    /// methods are always complete.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<FormField> {
        match self.method {
            PaymentMethod::CreditCard => {
                let required = [
                    (FormField::CardholderName, &self.cardholder_name),
                    (FormField::CardNumber, &self.card_number),
                    (FormField::ExpiryDate, &self.expiry_date),
                    (FormField::Cvv, &self.cvv),
                ];
                required
                    .into_iter()
                    .filter(|(_, value)| value.is_empty())
                    .map(|(field, _)| field)
                    .collect()
            }
            PaymentMethod::Paypal | PaymentMethod::BankTransfer => Vec::new(),
        }
    }

    /// Whether the payment stage can be considered complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// One typed update to the payment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentUpdate {
    CardholderName(String),
    CardNumber(String),
    ExpiryDate(String),
    Cvv(String),
    SavePayment(bool),
}

/// Payment method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    Paypal,
    BankTransfer,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => write!(f, "credit-card"),
            Self::Paypal => write!(f, "paypal"),
            Self::BankTransfer => write!(f, "bank-transfer"),
        }
    }
}

/// A form field that can be reported missing by a stage guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    CardholderName,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zip_code",
            Self::CardholderName => "cardholder_name",
            Self::CardNumber => "card_number",
            Self::ExpiryDate => "expiry_date",
            Self::Cvv => "cvv",
        };
        write!(f, "{name}")
    }
}

/// Mask a card number for display: strip whitespace, regroup into blocks
/// of four separated by single spaces, truncate to 16 digits' worth.
#[must_use]
pub fn mask_card_number(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let mut masked = String::with_capacity(CARD_NUMBER_MAX_LEN);
    for (i, c) in compact.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            masked.push(' ');
        }
        masked.push(c);
    }
    masked.chars().take(CARD_NUMBER_MAX_LEN).collect()
}

/// Mask an expiry date for display: keep digits only, insert `/` after the
/// month once a year digit exists, truncate to `MM/YY`.
#[must_use]
pub fn mask_expiry_date(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > 2 {
        digits.insert(2, '/');
    }
    digits.chars().take(EXPIRY_MAX_LEN).collect()
}
