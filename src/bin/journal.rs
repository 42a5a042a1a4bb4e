use std::path::PathBuf;

use pocket_journal::calendar::{self, CalendarView};
use pocket_journal::calendar::grid::month_grid_now;
use pocket_journal::config::JournalConfig;
use pocket_journal::store::FolderStore;
use pocket_journal::Journal;

const DATA_FOLDER: &str = "journal_data";


fn main() {
    env_logger::init();

    let folder = std::env::args().nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DATA_FOLDER));

    let store = match FolderStore::from_folder(&folder) {
        Ok(store) => store,
        Err(err) => {
            log::error!("Unable to open the journal: {}", err);
            std::process::exit(1);
        }
    };
    let config = JournalConfig::default().with_calendar_persistence(true);
    let journal = Journal::with_config(store, config);
    let planner = journal.planner();

    let today = calendar::today();
    let view = CalendarView::Month { reference: today };
    println!("---- {} -----", view.title());
    pocket_journal::utils::print_month_grid(&month_grid_now(today), planner.tasks(), None);

    println!("---- {} -----", CalendarView::Future.title());
    for task in planner.tasks_for_future() {
        pocket_journal::utils::print_task(task);
    }

    println!("---- today -----");
    for task in planner.tasks_for_date(&calendar::date_key(today)) {
        pocket_journal::utils::print_task(task);
    }

    let lists = journal.lists();
    println!("---- {} lists, {} trackers, {} logs -----", lists.len(), journal.trackers().len(), journal.logs().len());
}
