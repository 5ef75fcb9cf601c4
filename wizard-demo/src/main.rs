//! Types a registration into both form models and prints what a view would show.
//!
//! Usage: `wizard-demo [NAME] [PASSWORD] [PASSWORD_AGAIN]`

use std::env;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use wizard_form::prelude::*;

const DEFAULT_NAME: &str = "Wizard1";
const DEFAULT_PASSWORD: &str = "Secretz9";

/// Feed `value` into a field one character at a time, like a user typing.
fn type_into(value: &str, mut set: impl FnMut(String)) {
    let mut typed = String::new();
    for c in value.chars() {
        typed.push(c);
        set(typed.clone());
    }
}

fn run_observable(name: &str, password: &str, password_again: &str) -> FormView {
    let form = ObservableForm::new();
    let observer = form.clone();
    let subscription = form.on_change(move || {
        log::debug!("accept enabled: {}", observer.can_accept_data());
    });

    type_into(name, |v| form.set_name(v));
    type_into(password, |v| form.set_password(v));
    type_into(password_again, |v| form.set_password_again(v));

    // The observer holds a handle to the form; release it so the form can drop.
    form.unsubscribe(subscription);
    FormView::from_observable(&form)
}

fn run_reactive(name: &str, password: &str, password_again: &str) -> FormView {
    let form = ReactiveForm::new();
    let state = ErrorState::attach(&form);

    type_into(name, |v| form.set_name(v));
    type_into(password, |v| form.set_password(v));
    type_into(password_again, |v| form.set_password_again(v));

    state.view()
}

fn main() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| DEFAULT_NAME.to_string());
    let password = args.next().unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
    let password_again = args.next().unwrap_or_else(|| password.clone());

    println!("== Observable model ==");
    println!("{}", run_observable(&name, &password, &password_again));
    println!();
    println!("== Reactive model ==");
    println!("{}", run_reactive(&name, &password, &password_again));
}
