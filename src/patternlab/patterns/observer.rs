//! Observer pattern: a stock keeps a list of observers and notifies them on
//! every genuine price change, in registration order.

use crate::error::Result;
use crate::sink::Sink;
use std::rc::Rc;

use super::{completed, section_header};

pub trait StockObserver {
    fn update(&self, symbol: &str, price: f64, sink: &mut dyn Sink) -> Result<()>;
}

/// Subject. Observers are held as `Rc` so removal can match on identity
/// rather than value.
pub struct Stock {
    symbol: String,
    price: f64,
    observers: Vec<Rc<dyn StockObserver>>,
}

impl Stock {
    pub fn new(symbol: impl Into<String>, initial_price: f64) -> Self {
        Self {
            symbol: symbol.into(),
            price: initial_price,
            observers: Vec::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Register an observer. Duplicates are allowed on purpose.
    pub fn add_observer(&mut self, observer: Rc<dyn StockObserver>) {
        self.observers.push(observer);
    }

    /// Remove the first registration of this exact observer, if any.
    pub fn remove_observer(&mut self, observer: &Rc<dyn StockObserver>) {
        if let Some(pos) = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
        {
            self.observers.remove(pos);
        }
    }

    /// Update the price; observers are notified only when it actually changed.
    pub fn set_price(&mut self, new_price: f64, sink: &mut dyn Sink) -> Result<()> {
        let old_price = self.price;
        self.price = new_price;
        if new_price != old_price {
            self.notify_observers(sink)?;
        }
        Ok(())
    }

    fn notify_observers(&self, sink: &mut dyn Sink) -> Result<()> {
        for observer in &self.observers {
            observer.update(&self.symbol, self.price, sink)?;
        }
        Ok(())
    }
}

/// Display-style observer: logs every update under its app name.
pub struct MobileApp {
    app_name: String,
}

impl MobileApp {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl StockObserver for MobileApp {
    fn update(&self, symbol: &str, price: f64, sink: &mut dyn Sink) -> Result<()> {
        sink.write_line(&format!(
            "[{}] Stock {} price updated: ${:.2}",
            self.app_name, symbol, price
        ))
    }
}

/// Reactive observer: classifies the price against fixed thresholds.
/// Above 150 sells, below 100 buys, everything in between is monitored.
pub struct TradingBot;

impl StockObserver for TradingBot {
    fn update(&self, symbol: &str, price: f64, sink: &mut dyn Sink) -> Result<()> {
        let message = if price > 150.0 {
            format!("[TradingBot] Selling {} at high price ${:.2}", symbol, price)
        } else if price < 100.0 {
            format!("[TradingBot] Buying {} at low price ${:.2}", symbol, price)
        } else {
            format!("[TradingBot] Monitoring {} at ${:.2}", symbol, price)
        };
        sink.write_line(&message)
    }
}

pub fn run<S: Sink>(sink: &mut S) -> Result<()> {
    section_header(sink, "Observer Pattern: Stock Market")?;

    let mut apple_stock = Stock::new("AAPL", 145.50);
    let mut google_stock = Stock::new("GOOGL", 2750.00);

    let mobile_app: Rc<dyn StockObserver> = Rc::new(MobileApp::new("StockTracker Pro"));
    let trading_bot: Rc<dyn StockObserver> = Rc::new(TradingBot);

    apple_stock.add_observer(Rc::clone(&mobile_app));
    apple_stock.add_observer(Rc::clone(&trading_bot));
    google_stock.add_observer(Rc::clone(&mobile_app));

    sink.write_line("Initial stock prices set")?;
    sink.write_line("Simulating price changes...")?;
    sink.blank_line()?;

    apple_stock.set_price(148.75, sink)?;
    apple_stock.set_price(152.30, sink)?;
    google_stock.set_price(2800.50, sink)?;
    apple_stock.set_price(95.80, sink)?;

    sink.blank_line()?;
    apple_stock.remove_observer(&trading_bot);
    sink.write_line("TradingBot unsubscribed from AAPL")?;
    apple_stock.set_price(101.25, sink)?;

    sink.blank_line()?;
    completed(sink, "Observer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::memory::MemorySink;

    /// Tags every notification so order and count are visible in the sink.
    struct Tagged {
        tag: &'static str,
    }

    impl StockObserver for Tagged {
        fn update(&self, _symbol: &str, price: f64, sink: &mut dyn Sink) -> Result<()> {
            sink.write_line(&format!("{}:{:.2}", self.tag, price))
        }
    }

    #[test]
    fn unchanged_price_does_not_notify() {
        let mut sink = MemorySink::new();
        let mut stock = Stock::new("TEST", 100.0);
        stock.add_observer(Rc::new(Tagged { tag: "a" }));

        stock.set_price(100.0, &mut sink).unwrap();

        assert!(sink.lines().is_empty());
    }

    #[test]
    fn changed_price_notifies_in_registration_order() {
        let mut sink = MemorySink::new();
        let mut stock = Stock::new("TEST", 100.0);
        stock.add_observer(Rc::new(Tagged { tag: "first" }));
        stock.add_observer(Rc::new(Tagged { tag: "second" }));

        stock.set_price(110.0, &mut sink).unwrap();

        assert_eq!(sink.lines(), &["first:110.00", "second:110.00"]);
    }

    #[test]
    fn duplicate_registration_notifies_twice() {
        let mut sink = MemorySink::new();
        let mut stock = Stock::new("TEST", 100.0);
        let obs: Rc<dyn StockObserver> = Rc::new(Tagged { tag: "dup" });
        stock.add_observer(Rc::clone(&obs));
        stock.add_observer(Rc::clone(&obs));

        stock.set_price(110.0, &mut sink).unwrap();

        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn remove_observer_stops_notifications() {
        let mut sink = MemorySink::new();
        let mut stock = Stock::new("TEST", 100.0);
        let kept: Rc<dyn StockObserver> = Rc::new(Tagged { tag: "kept" });
        let removed: Rc<dyn StockObserver> = Rc::new(Tagged { tag: "removed" });
        stock.add_observer(Rc::clone(&kept));
        stock.add_observer(Rc::clone(&removed));

        stock.remove_observer(&removed);
        stock.set_price(110.0, &mut sink).unwrap();

        assert_eq!(sink.lines(), &["kept:110.00"]);
    }

    #[test]
    fn remove_absent_observer_is_a_noop() {
        let mut sink = MemorySink::new();
        let mut stock = Stock::new("TEST", 100.0);
        let registered: Rc<dyn StockObserver> = Rc::new(Tagged { tag: "in" });
        let stranger: Rc<dyn StockObserver> = Rc::new(Tagged { tag: "out" });
        stock.add_observer(Rc::clone(&registered));

        stock.remove_observer(&stranger);
        stock.set_price(110.0, &mut sink).unwrap();

        assert_eq!(sink.lines(), &["in:110.00"]);
    }

    #[test]
    fn trading_bot_threshold_boundaries() {
        let mut sink = MemorySink::new();
        let bot = TradingBot;

        bot.update("X", 150.01, &mut sink).unwrap();
        bot.update("X", 150.0, &mut sink).unwrap();
        bot.update("X", 100.0, &mut sink).unwrap();
        bot.update("X", 99.99, &mut sink).unwrap();

        assert!(sink.lines()[0].contains("Selling"));
        assert!(sink.lines()[1].contains("Monitoring"));
        assert!(sink.lines()[2].contains("Monitoring"));
        assert!(sink.lines()[3].contains("Buying"));
    }

    #[test]
    fn demo_transcript_mentions_both_observers() {
        let mut sink = MemorySink::new();
        run(&mut sink).unwrap();

        assert!(sink.contains("StockTracker Pro"));
        assert!(sink.contains("[TradingBot] Buying AAPL at low price $95.80"));
        assert!(sink.contains("Observer pattern demonstration completed successfully!"));
    }
}
