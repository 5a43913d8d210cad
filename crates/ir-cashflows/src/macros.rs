// Structural `Hash` for values with floating-point fields: `hash` fields
// implement `Hash`, `real` fields implement `HashReal`.
macro_rules! impl_structural_hash {
    ($ty:ty { hash: [$($field:ident),* $(,)?], real: [$($real:ident),* $(,)?] }) => {
        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                #[allow(unused_imports)]
                use ::ir_core::HashReal;
                $( ::std::hash::Hash::hash(&self.$field, state); )*
                $( self.$real.hash_real(state); )*
            }
        }
    };
}

// `CashFlow` for coupons holding their shared fields in `self.coupon`.
macro_rules! impl_coupon_cash_flow {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::cashflow::CashFlow for $ty {
                fn currency(&self) -> ::ir_currencies::Currency {
                    self.coupon.currency()
                }

                fn payment_time(&self) -> ::ir_core::Time {
                    self.coupon.payment_time()
                }

                fn reference_amount(&self) -> ::ir_core::Real {
                    self.coupon.notional()
                }
            }
        )*
    };
}
