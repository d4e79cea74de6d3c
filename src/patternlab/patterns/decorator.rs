//! Decorator pattern: wrappers around a base coffee, each delegating to its
//! child first and then adding a fixed cost increment and description suffix.
//! Total cost is the base plus every layer's increment; the description picks
//! up suffixes innermost-first.

use crate::error::Result;
use crate::sink::Sink;

use super::{completed, section_header};

pub trait Coffee {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        2.50
    }

    fn description(&self) -> String {
        "Simple coffee".to_string()
    }
}

macro_rules! coffee_decorator {
    ($name:ident, $increment:expr, $suffix:expr) => {
        pub struct $name {
            inner: Box<dyn Coffee>,
        }

        impl $name {
            pub fn new(inner: Box<dyn Coffee>) -> Self {
                Self { inner }
            }
        }

        impl Coffee for $name {
            fn cost(&self) -> f64 {
                self.inner.cost() + $increment
            }

            fn description(&self) -> String {
                format!("{}{}", self.inner.description(), $suffix)
            }
        }
    };
}

coffee_decorator!(MilkDecorator, 0.50, ", milk");
coffee_decorator!(SugarDecorator, 0.25, ", sugar");
coffee_decorator!(WhippedCreamDecorator, 0.75, ", whipped cream");
coffee_decorator!(CaramelDecorator, 1.00, ", caramel");
coffee_decorator!(ChocolateDecorator, 0.80, ", chocolate");

fn priced(coffee: &dyn Coffee) -> String {
    format!("{} - ${:.2}", coffee.description(), coffee.cost())
}

pub fn run<S: Sink>(sink: &mut S) -> Result<()> {
    section_header(sink, "Decorator Pattern: Coffee Shop")?;
    sink.blank_line()?;

    let coffee = SimpleCoffee;
    sink.write_line(&format!("1. {}", priced(&coffee)))?;

    let coffee_with_milk_sugar =
        SugarDecorator::new(Box::new(MilkDecorator::new(Box::new(SimpleCoffee))));
    sink.write_line(&format!("2. {}", priced(&coffee_with_milk_sugar)))?;

    let fancy_coffee = CaramelDecorator::new(Box::new(WhippedCreamDecorator::new(Box::new(
        ChocolateDecorator::new(Box::new(MilkDecorator::new(Box::new(SimpleCoffee)))),
    ))));
    sink.write_line(&format!("3. {}", priced(&fancy_coffee)))?;
    sink.blank_line()?;

    sink.write_line("Building custom coffee step by step:")?;
    let mut my_coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    sink.write_line(&format!("Base: {}", priced(my_coffee.as_ref())))?;

    my_coffee = Box::new(MilkDecorator::new(my_coffee));
    sink.write_line(&format!("After milk: {}", priced(my_coffee.as_ref())))?;

    my_coffee = Box::new(ChocolateDecorator::new(my_coffee));
    sink.write_line(&format!("After chocolate: {}", priced(my_coffee.as_ref())))?;

    my_coffee = Box::new(WhippedCreamDecorator::new(my_coffee));
    sink.write_line(&format!("Final: {}", priced(my_coffee.as_ref())))?;
    sink.blank_line()?;

    completed(sink, "Decorator")
}
