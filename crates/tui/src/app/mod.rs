use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossterm::event::{self, Event, KeyEvent};

use api_types::expense::Expense;
use engine::{Category, CategoryFilter, Currency, MoneyCents, Summary};

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::{AppError, Result},
    expense_form::{ExpenseForm, FormField},
    export,
    ui::{self, Theme, keymap::AppAction},
};

const TOAST_TTL: Duration = Duration::from_secs(3);
const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Expenses,
    Analytics,
    Settings,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Expenses => "Expenses",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

/// Input routing: which component currently consumes keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Typing into the add-expense form (Dashboard).
    Form,
    /// Typing into the search box (Expenses).
    Search,
    /// Typing a new monthly budget (Settings).
    Budget,
    /// Blocking delete confirmation (Expenses).
    Confirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Transient notification; purely cosmetic, self-dismisses on the tick.
#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    expires_at: Instant,
}

impl ToastState {
    fn new(level: ToastLevel, message: String) -> Self {
        Self {
            message,
            level,
            expires_at: Instant::now() + TOAST_TTL,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Pending delete awaiting explicit confirmation.
#[derive(Debug, Clone)]
pub struct ConfirmDelete {
    pub id: String,
    pub title: String,
}

#[derive(Debug)]
pub struct SettingsState {
    pub currency: Currency,
    pub budget: MoneyCents,
    pub notifications: bool,
    pub dark: bool,
    pub budget_input: String,
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub mode: Mode,
    /// Direct reflection of the last successful fetch; a failed fetch leaves
    /// it stale rather than blanking the dashboard.
    pub expenses: Vec<Expense>,
    /// Selected row within the filtered expenses view.
    pub selected: usize,
    pub form: ExpenseForm,
    pub search: String,
    pub category_filter: CategoryFilter,
    pub settings: SettingsState,
    pub toast: Option<ToastState>,
    pub confirm: Option<ConfirmDelete>,
    pub connection_ok: bool,
    pub last_refresh: Option<DateTime<Utc>>,
    pub base_url: String,
}

impl AppState {
    pub fn theme(&self) -> Theme {
        if self.settings.dark {
            Theme::dark()
        } else {
            Theme::light()
        }
    }

    /// The filtered subsequence backing the Expenses table.
    pub fn filtered(&self) -> Vec<&Expense> {
        engine::filter(&self.expenses, &self.category_filter, &self.search)
    }

    /// First records in store order, for the Dashboard recent list.
    pub fn recent(&self) -> &[Expense] {
        engine::recent(&self.expenses, RECENT_LIMIT)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.expenses, self.settings.budget)
    }

    fn expire_toast(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    fn select_next(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn cycle_category_filter(&mut self) {
        self.category_filter = match &self.category_filter {
            CategoryFilter::All => {
                CategoryFilter::Category(Category::ALL[0].label().to_string())
            }
            CategoryFilter::Category(label) => {
                let next = Category::from_label(label)
                    .and_then(|current| {
                        Category::ALL
                            .iter()
                            .position(|c| *c == current)
                            .and_then(|idx| Category::ALL.get(idx + 1))
                    })
                    .map(|c| c.label().to_string());
                match next {
                    Some(label) => CategoryFilter::Category(label),
                    None => CategoryFilter::All,
                }
            }
        };
        self.selected = 0;
    }
}

pub struct App {
    client: Client,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url)?;
        let currency = Currency::try_from(config.currency.as_str())
            .map_err(|err| config::ConfigError::Message(err.to_string()))?;

        let state = AppState {
            section: Section::Dashboard,
            mode: Mode::Normal,
            expenses: Vec::new(),
            selected: 0,
            form: ExpenseForm::default(),
            search: String::new(),
            category_filter: CategoryFilter::All,
            settings: SettingsState {
                currency,
                budget: MoneyCents::from_major(config.budget),
                notifications: config.notifications,
                dark: config.dark,
                budget_input: String::new(),
            },
            toast: None,
            confirm: None,
            connection_ok: true,
            last_refresh: None,
            base_url: config.base_url.clone(),
        };

        Ok(Self {
            client,
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        self.refresh().await;

        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            self.state.expire_toast(Instant::now());

            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let action = ui::keymap::map_key(key);

        if action == AppAction::Quit {
            self.should_quit = true;
            return Ok(());
        }

        match self.state.mode {
            Mode::Form => self.handle_form_key(action).await,
            Mode::Search => self.handle_search_key(action),
            Mode::Budget => self.handle_budget_key(action),
            Mode::Confirm => self.handle_confirm_key(action).await,
            Mode::Normal => self.handle_normal_key(action).await,
        }
    }

    async fn handle_normal_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Up => self.state.select_prev(),
            AppAction::Down => self.state.select_next(),
            AppAction::Input(ch) => self.handle_normal_char(ch).await?,
            _ => {}
        }
        Ok(())
    }

    async fn handle_normal_char(&mut self, ch: char) -> Result<()> {
        match ch.to_ascii_lowercase() {
            'q' => self.should_quit = true,
            'd' => self.state.section = Section::Dashboard,
            'e' => self.state.section = Section::Expenses,
            'a' => self.state.section = Section::Analytics,
            's' => self.state.section = Section::Settings,
            'r' => self.refresh().await,
            'i' if self.state.section == Section::Dashboard => {
                self.state.mode = Mode::Form;
            }
            '/' if self.state.section == Section::Expenses => {
                self.state.mode = Mode::Search;
            }
            'c' if self.state.section == Section::Expenses => {
                self.state.cycle_category_filter();
            }
            'c' if self.state.section == Section::Settings => {
                self.state.settings.currency = self.state.settings.currency.next();
            }
            'j' if self.state.section == Section::Expenses => self.state.select_next(),
            'k' if self.state.section == Section::Expenses => self.state.select_prev(),
            'x' if self.state.section == Section::Expenses => self.open_confirm(),
            'o' if matches!(self.state.section, Section::Expenses | Section::Settings) => {
                self.export_snapshot();
            }
            'b' if self.state.section == Section::Settings => {
                self.state.settings.budget_input =
                    self.state.settings.budget.to_major().to_string();
                self.state.mode = Mode::Budget;
            }
            'n' if self.state.section == Section::Settings => {
                self.state.settings.notifications = !self.state.settings.notifications;
            }
            't' if self.state.section == Section::Settings => {
                self.state.settings.dark = !self.state.settings.dark;
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Cancel => self.state.mode = Mode::Normal,
            AppAction::NextField => self.state.form.next_field(),
            AppAction::Submit => self.submit_form().await,
            AppAction::Backspace => self.state.form.backspace(),
            AppAction::Left if self.state.form.focus == FormField::Category => {
                self.state.form.cycle_category(false);
            }
            AppAction::Right if self.state.form.focus == FormField::Category => {
                self.state.form.cycle_category(true);
            }
            AppAction::Input(ch) => self.state.form.input(ch),
            _ => {}
        }
        Ok(())
    }

    fn handle_search_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Cancel | AppAction::Submit => self.state.mode = Mode::Normal,
            AppAction::Backspace => {
                self.state.search.pop();
                self.state.clamp_selection();
            }
            AppAction::Up => self.state.select_prev(),
            AppAction::Down => self.state.select_next(),
            AppAction::Input(ch) => {
                self.state.search.push(ch);
                self.state.clamp_selection();
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_budget_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Cancel => {
                self.state.settings.budget_input.clear();
                self.state.mode = Mode::Normal;
            }
            AppAction::Submit => match self.state.settings.budget_input.parse::<MoneyCents>() {
                Ok(budget) => {
                    self.state.settings.budget = budget;
                    self.state.settings.budget_input.clear();
                    self.state.mode = Mode::Normal;
                    self.notify(ToastLevel::Success, "Budget updated.");
                }
                Err(_) => {
                    self.notify(ToastLevel::Error, "Budget is not a valid amount.");
                }
            },
            AppAction::Backspace => {
                self.state.settings.budget_input.pop();
            }
            AppAction::Input(ch) => self.state.settings.budget_input.push(ch),
            _ => {}
        }
        Ok(())
    }

    async fn handle_confirm_key(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Input('y') | AppAction::Input('Y') | AppAction::Submit => {
                self.confirm_delete().await;
            }
            AppAction::Input('n') | AppAction::Input('N') | AppAction::Cancel => {
                self.state.confirm = None;
                self.state.mode = Mode::Normal;
            }
            _ => {}
        }
        Ok(())
    }

    /// Full-list refetch. On failure the previously displayed record set
    /// stays visible.
    async fn refresh(&mut self) {
        match self.client.list().await {
            Ok(expenses) => {
                self.state.expenses = expenses;
                self.state.connection_ok = true;
                self.state.last_refresh = Some(Utc::now());
                self.state.clamp_selection();
            }
            Err(err) => {
                tracing::error!("failed to fetch expenses: {err}");
                self.state.connection_ok = false;
                self.notify(ToastLevel::Error, message_for_error(err));
            }
        }
    }

    async fn submit_form(&mut self) {
        // Client-side validation: an invalid draft never reaches the wire.
        let draft = match self.state.form.build(Utc::now()) {
            Ok(draft) => draft,
            Err(message) => {
                // Logged as well; toasts may be switched off.
                tracing::warn!("rejected expense draft: {message}");
                self.notify(ToastLevel::Error, message);
                return;
            }
        };

        match self.client.create(draft).await {
            Ok(_) => {
                self.state.form.clear();
                self.state.mode = Mode::Normal;
                self.refresh().await;
                self.notify(ToastLevel::Success, "Expense added.");
            }
            Err(err) => {
                tracing::error!("failed to create expense: {err}");
                self.notify(ToastLevel::Error, message_for_error(err));
            }
        }
    }

    fn open_confirm(&mut self) {
        let target = self
            .state
            .filtered()
            .get(self.state.selected)
            .map(|expense| ConfirmDelete {
                id: expense.id.clone(),
                title: expense.title.clone(),
            });

        if let Some(confirm) = target {
            self.state.confirm = Some(confirm);
            self.state.mode = Mode::Confirm;
        }
    }

    async fn confirm_delete(&mut self) {
        let Some(confirm) = self.state.confirm.take() else {
            self.state.mode = Mode::Normal;
            return;
        };
        self.state.mode = Mode::Normal;

        match self.client.delete(&confirm.id).await {
            Ok(()) => {
                self.refresh().await;
                self.notify(ToastLevel::Success, "Expense deleted.");
            }
            // Someone else already removed it; the outcome is what the user
            // asked for.
            Err(ClientError::NotFound) => {
                tracing::info!("expense {} already gone from the store", confirm.id);
                self.refresh().await;
                self.notify(ToastLevel::Info, "Expense was already removed.");
            }
            Err(err) => {
                tracing::error!("failed to delete expense: {err}");
                self.notify(ToastLevel::Error, message_for_error(err));
            }
        }
    }

    fn export_snapshot(&mut self) {
        match export::write_snapshot(&self.state.expenses) {
            Ok(file_name) => {
                tracing::info!("exported {} records to {file_name}", self.state.expenses.len());
                self.notify(ToastLevel::Success, format!("Exported to {file_name}."));
            }
            Err(err) => {
                tracing::error!("export failed: {err}");
                self.notify(ToastLevel::Error, "Export failed.");
            }
        }
    }

    fn notify(&mut self, level: ToastLevel, message: impl Into<String>) {
        if !self.state.settings.notifications {
            return;
        }
        self.state.toast = Some(ToastState::new(level, message.into()));
    }
}

fn message_for_error(err: ClientError) -> String {
    match err {
        ClientError::NotFound => "Record not found on the store.".to_string(),
        ClientError::Validation(message) => format!("Validation failed: {message}"),
        ClientError::Server(message) => format!("Store error: {message}"),
        ClientError::Transport(err) => format!("Store unreachable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, title: &str, category: &str) -> Expense {
        Expense {
            id: id.to_string(),
            title: title.to_string(),
            amount: 10.0,
            category: category.to_string(),
            description: None,
            date: Utc::now(),
        }
    }

    fn state_with(expenses: Vec<Expense>) -> AppState {
        AppState {
            section: Section::Expenses,
            mode: Mode::Normal,
            expenses,
            selected: 0,
            form: ExpenseForm::default(),
            search: String::new(),
            category_filter: CategoryFilter::All,
            settings: SettingsState {
                currency: Currency::Inr,
                budget: MoneyCents::from_major(1000.0),
                notifications: true,
                dark: true,
                budget_input: String::new(),
            },
            toast: None,
            confirm: None,
            connection_ok: true,
            last_refresh: None,
            base_url: "http://127.0.0.1:5000/api/".to_string(),
        }
    }

    #[test]
    fn category_filter_cycles_through_all_and_wraps() {
        let mut state = state_with(Vec::new());
        assert_eq!(state.category_filter, CategoryFilter::All);

        for _ in 0..Category::ALL.len() {
            state.cycle_category_filter();
            assert_ne!(state.category_filter, CategoryFilter::All);
        }

        state.cycle_category_filter();
        assert_eq!(state.category_filter, CategoryFilter::All);
    }

    #[test]
    fn narrowing_the_search_clamps_the_selection() {
        let mut state = state_with(vec![
            expense("1", "Groceries", "Food"),
            expense("2", "Bus pass", "Transport"),
            expense("3", "Dinner", "Food"),
        ]);
        state.selected = 2;

        state.search = "bus".to_string();
        state.clamp_selection();

        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_does_not_move_past_the_last_row() {
        let mut state = state_with(vec![
            expense("1", "Groceries", "Food"),
            expense("2", "Bus pass", "Transport"),
        ]);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);

        state.select_prev();
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_is_inert_on_an_empty_list() {
        let mut state = state_with(Vec::new());
        state.select_next();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn toast_expires_only_after_its_ttl() {
        let toast = ToastState::new(ToastLevel::Info, "hello".to_string());
        let now = Instant::now();
        assert!(!toast.is_expired(now));
        assert!(toast.is_expired(now + TOAST_TTL + Duration::from_millis(50)));
    }

    #[tokio::test]
    async fn rejected_draft_never_reaches_the_wire_and_keeps_the_form_open() {
        let config = AppConfig {
            notifications: false,
            ..AppConfig::default()
        };
        let mut app = App::new(config).unwrap();
        app.state.mode = Mode::Form;

        // Empty title: rejected locally, so no request is attempted even
        // though no store is running.
        app.submit_form().await;

        assert!(app.state.toast.is_none());
        assert_eq!(app.state.mode, Mode::Form);
        assert!(app.state.expenses.is_empty());
    }

    #[test]
    fn store_errors_map_to_readable_messages() {
        assert_eq!(
            message_for_error(ClientError::NotFound),
            "Record not found on the store."
        );
        assert_eq!(
            message_for_error(ClientError::Validation("title is required".to_string())),
            "Validation failed: title is required"
        );
    }
}
