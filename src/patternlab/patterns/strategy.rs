//! Strategy pattern: a payment processor delegates to whichever algorithm is
//! currently installed. Executing without one is an invalid-state error.

use crate::error::{PatternError, Result};
use crate::sink::Sink;

use super::{completed, section_header};

pub trait PaymentStrategy {
    fn process(&self, amount: f64, sink: &mut dyn Sink) -> Result<bool>;
}

pub struct CreditCardPayment {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CreditCardPayment {
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            cvv: cvv.into(),
        }
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn process(&self, amount: f64, sink: &mut dyn Sink) -> Result<bool> {
        let last4 = &self.card_number[self.card_number.len().saturating_sub(4)..];
        sink.write_line(&format!("Processing credit card payment of ${:.2}", amount))?;
        sink.write_line(&format!("Card: ****-****-****-{}", last4))?;
        Ok(true)
    }
}

pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn process(&self, amount: f64, sink: &mut dyn Sink) -> Result<bool> {
        sink.write_line(&format!("Processing PayPal payment of ${:.2}", amount))?;
        sink.write_line(&format!("Email: {}", self.email))?;
        Ok(true)
    }
}

pub struct CryptoPayment {
    wallet_address: String,
}

impl CryptoPayment {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
        }
    }

    fn masked_wallet(&self) -> String {
        // First 8 and last 4 characters; short addresses are shown whole.
        if self.wallet_address.len() > 12 {
            format!(
                "{}...{}",
                &self.wallet_address[..8],
                &self.wallet_address[self.wallet_address.len() - 4..]
            )
        } else {
            self.wallet_address.clone()
        }
    }
}

impl PaymentStrategy for CryptoPayment {
    fn process(&self, amount: f64, sink: &mut dyn Sink) -> Result<bool> {
        sink.write_line(&format!(
            "Processing cryptocurrency payment of ${:.2}",
            amount
        ))?;
        sink.write_line(&format!("Wallet: {}", self.masked_wallet()))?;
        Ok(true)
    }
}

/// Holds at most one active strategy. The unset state is explicit, not a
/// null reference.
#[derive(Default)]
pub struct PaymentProcessor {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl PaymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a strategy, replacing any previous one.
    pub fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    /// Delegate to the active strategy; errors when none is installed.
    pub fn execute_payment(&self, amount: f64, sink: &mut dyn Sink) -> Result<bool> {
        let strategy = self.strategy.as_ref().ok_or(PatternError::StrategyNotSet)?;
        strategy.process(amount, sink)
    }
}

pub fn run<S: Sink>(sink: &mut S) -> Result<()> {
    section_header(sink, "Strategy Pattern: Payment Processing")?;
    sink.blank_line()?;

    let mut processor = PaymentProcessor::new();

    sink.write_line("1. Credit Card Payment:")?;
    processor.set_strategy(Box::new(CreditCardPayment::new(
        "1234567812345678",
        "12/25",
        "123",
    )));
    processor.execute_payment(99.99, sink)?;
    sink.blank_line()?;

    sink.write_line("2. PayPal Payment:")?;
    processor.set_strategy(Box::new(PayPalPayment::new("user@example.com")));
    processor.execute_payment(149.50, sink)?;
    sink.blank_line()?;

    sink.write_line("3. Crypto Payment:")?;
    processor.set_strategy(Box::new(CryptoPayment::new(
        "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
    )));
    processor.execute_payment(299.99, sink)?;
    sink.blank_line()?;

    completed(sink, "Strategy")
}
