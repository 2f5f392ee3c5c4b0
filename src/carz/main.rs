use carz::api::{CarzApi, CmdMessage, ConfigAction, MessageLevel};
use carz::config::{config_dir, CarzConfig};
use carz::error::{CarzError, Result};
use carz::form::{format_consumption, CarForm};
use carz::model::Car;
use carz::store::http::HttpStore;
use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use log::debug;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{CarFieldArgs, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CarzApi<HttpStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let mut config = CarzConfig::load(&config_dir)?;
    config.apply_env();
    if let Some(url) = &cli.server_url {
        config.set_server_url(url);
    }
    if let Some(code) = &cli.code {
        config.set_code(code);
    }

    // `carz config code <CODE>` must work while no code is set, so a
    // missing endpoint surfaces on the first store operation instead of
    // here.
    let store = match config.endpoint() {
        Ok(endpoint) => HttpStore::new(endpoint),
        Err(CarzError::Config(reason)) => HttpStore::unconfigured(reason),
        Err(e) => return Err(e),
    };

    Ok(AppContext {
        api: CarzApi::new(store, config_dir),
    })
}

fn form_from_fields(fields: CarFieldArgs) -> CarForm {
    CarForm {
        brand: fields.brand,
        model: fields.model,
        year: fields.year,
        consumption: fields.consumption,
        electric: fields.electric,
        owner: fields.owner,
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_cars()?;
    if let Some(cars) = &result.listed_cars {
        print_cars(cars);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, id: i64) -> Result<()> {
    let result = ctx.api.view_car(id)?;
    for car in result.listed_cars.as_deref().unwrap_or_default() {
        print_car_details(car);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: CarFieldArgs) -> Result<()> {
    let result = ctx.api.add_car(form_from_fields(fields))?;
    print_messages(&result.messages);
    if let Some(cars) = &result.listed_cars {
        print_cars(cars);
    }
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: i64, fields: CarFieldArgs) -> Result<()> {
    let result = ctx.api.edit_car(id, form_from_fields(fields))?;
    print_messages(&result.messages);
    if let Some(cars) = &result.listed_cars {
        print_cars(cars);
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: i64, yes: bool) -> Result<()> {
    debug!("delete requested for car {}", id);
    let result = ctx.api.delete_car(id, yes)?;
    print_messages(&result.messages);
    if let Some(cars) = &result.listed_cars {
        print_cars(cars);
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("server-url = {}", config.server_url);
        println!("code = {}", config.code.as_deref().unwrap_or("(unset)"));
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 76;
const FUEL_WIDTH: usize = 14;

fn print_cars(cars: &[Car]) {
    if cars.is_empty() {
        println!("No cars to display.");
        return;
    }

    for car in cars {
        let idx_str = format!("{:>4}. ", car.id);
        let year_str = format!(
            "{:>6}",
            car.year()
                .map(|y| y.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        );

        let name = format!("{} {}", car.brand, car.model);
        let name = name.trim();

        let fixed_width = idx_str.width() + year_str.width() + 2 + FUEL_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name_display = truncate_to_width(name, available);
        let padding = available.saturating_sub(name_display.width());

        let fuel_str = format!("{:>width$}", fuel_cell(car), width = FUEL_WIDTH);
        let fuel_colored = if car.electric {
            fuel_str.cyan()
        } else if car.fuel_use.is_none() {
            fuel_str.dimmed()
        } else {
            fuel_str.normal()
        };

        println!(
            "{}{}{}{}  {}",
            idx_str,
            name_display,
            " ".repeat(padding),
            year_str.dimmed(),
            fuel_colored
        );
    }
}

fn print_car_details(car: &Car) {
    println!(
        "{} {}",
        format!("#{}", car.id).yellow(),
        format!("{} {}", car.brand, car.model).trim().bold()
    );
    println!("--------------------------------");
    println!("{:<14}{}", "Brand:", na_if_empty(&car.brand));
    println!("{:<14}{}", "Model:", na_if_empty(&car.model));
    println!(
        "{:<14}{}",
        "Year:",
        car.year()
            .map(|y| y.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    );
    println!(
        "{:<14}{}",
        "Electric:",
        if car.electric { "yes" } else { "no" }
    );
    println!("{:<14}{}", "Consumption:", consumption_text(car));
    println!("{:<14}{}", "Owner:", na_if_empty(&car.owner));

    let commissioned = match car.day_of_commission.as_deref() {
        Some(date) => match format_time_ago(date) {
            Some(ago) => format!("{} ({})", date, ago),
            None => date.to_string(),
        },
        None => "n/a".to_string(),
    };
    println!("{:<14}{}", "Commissioned:", commissioned);
}

/// "7,1 l/100km", "no data", or a marker for electric cars.
fn fuel_cell(car: &Car) -> String {
    if car.electric {
        return "electric".to_string();
    }
    match car.fuel_use {
        Some(fuel) => format!("{} l/100km", format_consumption(fuel)),
        None => "no data".to_string(),
    }
}

fn consumption_text(car: &Car) -> String {
    if car.electric {
        "none (electric)".to_string()
    } else {
        fuel_cell(car)
    }
}

fn na_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "n/a"
    } else {
        value
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(date: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let days = Utc::now()
        .date_naive()
        .signed_duration_since(date)
        .num_days();
    if days < 0 {
        return None;
    }

    let formatter = timeago::Formatter::new();
    Some(formatter.convert(std::time::Duration::from_secs(days as u64 * 86_400)))
}
