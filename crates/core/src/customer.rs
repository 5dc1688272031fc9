//! Customer submission rules and the typed input they produce.
//!
//! [`customer_rules`] is the declarative rule table for a customer form.
//! [`validate_customer`] evaluates it against an untyped record and, when
//! every field passes, converts the record into a [`CustomerInput`].

use serde::Serialize;
use serde_json::{Map, Value};

use crate::validation::evaluator::{as_bool, as_number, evaluate_rules, is_filled};
use crate::validation::rules::{Constraint, FieldErrors, FieldRules, ValidationResult};

crate::define_literal_enum! {
    /// Payment terms offered to a customer.
    CreditPeriod("credit period") {
        FifteenDays = "15 days",
        ThirtyDays = "30 days",
        FiftyDays = "50 days",
        SixtyDays = "60 days",
    }
}

crate::define_literal_enum! {
    /// How `discount_value` is interpreted.
    DiscountType("discount type") {
        Amount = "amount",
        Percentage = "percentage",
    }
}

crate::define_literal_enum! {
    CustomerStatus("customer status") {
        Active = "active",
        Inactive = "inactive",
    }
}

const NON_NEGATIVE_NUMBER: &[Constraint] = &[Constraint::Numeric, Constraint::Min(0.0)];

/// Field rules for a customer submission, keyed by the form's field names.
static CUSTOMER_RULES: &[FieldRules] = &[
    FieldRules {
        field: "name",
        label: "name",
        constraints: &[Constraint::Required, Constraint::String],
    },
    FieldRules {
        field: "contactNumber",
        label: "contact number",
        constraints: &[Constraint::Required, Constraint::String],
    },
    FieldRules {
        field: "email",
        label: "email",
        constraints: &[Constraint::String, Constraint::Email],
    },
    FieldRules {
        field: "address",
        label: "address",
        constraints: &[Constraint::String],
    },
    FieldRules {
        field: "vatNumber",
        label: "vat number",
        constraints: &[Constraint::String],
    },
    FieldRules {
        field: "creditLimit",
        label: "credit limit",
        constraints: NON_NEGATIVE_NUMBER,
    },
    FieldRules {
        field: "creditPeriod",
        label: "credit period",
        constraints: &[Constraint::Required, Constraint::In(CreditPeriod::VALUES)],
    },
    FieldRules {
        field: "discountValue",
        label: "discount value",
        constraints: NON_NEGATIVE_NUMBER,
    },
    FieldRules {
        field: "discountType",
        label: "discount type",
        constraints: &[Constraint::In(DiscountType::VALUES)],
    },
    FieldRules {
        field: "netBalance",
        label: "net balance",
        constraints: NON_NEGATIVE_NUMBER,
    },
    FieldRules {
        field: "status",
        label: "status",
        constraints: &[Constraint::Required, Constraint::In(CustomerStatus::VALUES)],
    },
    FieldRules {
        field: "availability",
        label: "availability",
        constraints: &[Constraint::Boolean],
    },
];

/// A customer submission that passed [`customer_rules`].
///
/// Strings are trimmed; blank optional fields become `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerInput {
    pub name: String,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub vat_number: Option<String>,
    pub credit_limit: Option<f64>,
    pub credit_period: CreditPeriod,
    pub discount_value: Option<f64>,
    pub discount_type: Option<DiscountType>,
    pub net_balance: Option<f64>,
    pub status: CustomerStatus,
    pub availability: bool,
}

/// The rule table applied to every customer submission, in field order.
pub fn customer_rules() -> &'static [FieldRules] {
    CUSTOMER_RULES
}

/// Run the customer rule table without converting.
pub fn check_customer(data: &Map<String, Value>) -> ValidationResult {
    evaluate_rules(customer_rules(), data)
}

/// Validate a submitted record and convert it into a [`CustomerInput`].
///
/// On rejection, every failing field is reported.
pub fn validate_customer(data: &Map<String, Value>) -> Result<CustomerInput, FieldErrors> {
    let result = check_customer(data);
    if !result.is_valid {
        return Err(result.field_errors());
    }

    let fields = Fields(data);
    Ok(CustomerInput {
        name: fields.text("name").unwrap_or_default(),
        contact_number: fields.text("contactNumber").unwrap_or_default(),
        email: fields.text("email"),
        address: fields.text("address"),
        vat_number: fields.text("vatNumber"),
        credit_limit: fields.number("creditLimit"),
        credit_period: fields.literal("creditPeriod").unwrap_or_default(),
        discount_value: fields.number("discountValue"),
        discount_type: fields.literal("discountType"),
        net_balance: fields.number("netBalance"),
        status: fields.literal("status").unwrap_or_default(),
        availability: fields.flag("availability"),
    })
}

/// Typed reads over a record that already passed [`customer_rules`], so
/// required values are present and literals are in their sets.
struct Fields<'a>(&'a Map<String, Value>);

impl Fields<'_> {
    fn filled(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| is_filled(v))
    }

    fn text(&self, key: &str) -> Option<String> {
        self.filled(key)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
    }

    fn number(&self, key: &str) -> Option<f64> {
        self.filled(key).and_then(as_number)
    }

    fn flag(&self, key: &str) -> bool {
        self.filled(key).and_then(as_bool).unwrap_or(false)
    }

    fn literal<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.text(key)?.parse().ok()
    }
}

impl Default for CreditPeriod {
    fn default() -> Self {
        CreditPeriod::ThirtyDays
    }
}

impl Default for CustomerStatus {
    fn default() -> Self {
        CustomerStatus::Active
    }
}
