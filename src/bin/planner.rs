//! A command-line front end to the planner.
//! Set the RUST_LOG environment variable to display more info about what happens.

use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use ramadan_planner::ActivityId;
use ramadan_planner::ActivityStore;
use ramadan_planner::config;
use ramadan_planner::date::{format_display_date, parse_date, today};
use ramadan_planner::storage::FileStorage;
use ramadan_planner::utils::{print_day, print_month};
use ramadan_planner::view::{CalendarView, DailyView};
use ramadan_planner::view::daily::EMPTY_MESSAGE;


#[derive(Parser, Debug)]
#[command(version, about = "Plan your days, and check them off")]
struct Cli {
    /// The folder activities are stored into
    #[arg(long, env = "PLANNER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the checklist of a day
    Day {
        /// YYYY-MM-DD, defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// Plan a new activity
    Add {
        /// YYYY-MM-DD, defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        title: String,
        description: Option<String>,
    },
    /// Mark an activity as completed, or as not completed anymore
    Toggle {
        id: String,
    },
    /// Show a month grid
    Month {
        /// YYYY-MM, defaults to the current month
        #[arg(long, value_parser = parse_month_arg)]
        month: Option<NaiveDate>,
    },
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|err| format!("{:?} is not a YYYY-MM-DD date: {}", s, err))
}

fn parse_month_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(&format!("{}-01", s)).map_err(|err| format!("{:?} is not a YYYY-MM month: {}", s, err))
}


fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let storage = match cli.data_dir {
        Some(folder) => FileStorage::new(&folder),
        None => FileStorage::from_config()?,
    };
    log::debug!("Using data folder {:?}", storage.folder());
    let mut store = ActivityStore::from_storage(storage);
    let today = today();

    match cli.command.unwrap_or(Command::Day{ date: None }) {
        Command::Day{ date } => {
            let app_name = config::APP_NAME.lock().map_err(|_| "Unable to read the app name")?.clone();
            let tagline = config::APP_TAGLINE.lock().map_err(|_| "Unable to read the tagline")?.clone();
            println!("{} - {}", app_name, tagline);

            let view = DailyView::new(date.unwrap_or(today));
            print_day(&format_display_date(view.selected_date()), &view.rows(&store), EMPTY_MESSAGE);
        },
        Command::Add{ date, title, description } => {
            let mut view = DailyView::new(date.unwrap_or(today));
            let form = view.form_mut();
            form.open();
            form.set_title(title);
            form.set_description(description.unwrap_or_default());
            match view.submit_form(&mut store) {
                Some(id) => println!("Added {} on {}", id, view.selected_date()),
                None => println!("Nothing added: the title is empty"),
            }
        },
        Command::Toggle{ id } => {
            let id = ActivityId::from(id);
            if store.toggle_complete(&id) == false {
                return Err(format!("No activity with id {}", id).into());
            }
            if let Some(activity) = store.get(&id) {
                let status = if activity.completed() { "completed" } else { "not completed" };
                println!("{} is now {}", activity.title(), status);
            }
        },
        Command::Month{ month } => {
            let view = CalendarView::new(month.unwrap_or(today));
            print_month(&view.month_label(), &view.cells(&store, today));
        },
    }

    Ok(())
}
