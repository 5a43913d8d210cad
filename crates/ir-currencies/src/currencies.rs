//! Pre-defined currency constants.

use crate::currency::Currency;

/// US Dollar.
pub static USD: Currency = Currency {
    name: "U.S. Dollar",
    code: "USD",
    numeric_code: 840,
    symbol: "$",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Euro.
pub static EUR: Currency = Currency {
    name: "Euro",
    code: "EUR",
    numeric_code: 978,
    symbol: "€",
    fractions_per_unit: 100,
    rounding: 2,
};

/// British pound sterling.
pub static GBP: Currency = Currency {
    name: "British Pound",
    code: "GBP",
    numeric_code: 826,
    symbol: "£",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Japanese Yen.
pub static JPY: Currency = Currency {
    name: "Japanese Yen",
    code: "JPY",
    numeric_code: 392,
    symbol: "¥",
    fractions_per_unit: 1,
    rounding: 0,
};

/// Swiss Franc.
pub static CHF: Currency = Currency {
    name: "Swiss Franc",
    code: "CHF",
    numeric_code: 756,
    symbol: "Fr",
    fractions_per_unit: 100,
    rounding: 2,
};

/// Brazilian Real.
pub static BRL: Currency = Currency {
    name: "Brazilian Real",
    code: "BRL",
    numeric_code: 986,
    symbol: "R$",
    fractions_per_unit: 100,
    rounding: 2,
};
