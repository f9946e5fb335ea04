use crate::config::UiConfig;
use crate::constants::{
    ERROR_LOAD_FAILED, ERROR_NO_EMPLOYEE_SELECTED, SUCCESS_ADDRESSES_UPDATED, SUCCESS_EMPLOYEES_CREATED,
    SUCCESS_EMPLOYEE_CREATED, SUCCESS_EMPLOYEE_DELETED, SUCCESS_EMPLOYEE_UPDATED,
};
use crate::directory::DirectoryService;
use crate::logger::Logger;
use crate::pagination::PageRequest;
use crate::roster::Roster;
use crate::search::{SearchCriterion, SearchQuery};
use crate::ui::components::{DialogComponent, EmployeeListComponent, SearchBarComponent, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Root component: routes keys, runs directory calls and owns the roster.
///
/// Dialogs and list components only ever receive copies of roster data. The
/// roster itself changes on the UI loop, and only after the directory has
/// confirmed an operation.
pub struct AppComponent {
    // Component composition
    search_bar: SearchBarComponent,
    employee_list: EmployeeListComponent,
    dialog: DialogComponent,

    // Application state
    roster: Roster,
    status_message: Option<String>,

    // Services
    directory: Arc<dyn DirectoryService>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    in_flight: usize,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(directory: Arc<dyn DirectoryService>, logger: Logger, ui: &UiConfig) -> Self {
        let search = SearchQuery {
            criterion: SearchCriterion::from_label(&ui.default_criterion),
            text: String::new(),
            state: ui.default_state.clone(),
        };
        let roster = Roster::new(search.clone(), PageRequest::new(0, ui.page_size));
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            search_bar: SearchBarComponent::new(search),
            employee_list: EmployeeListComponent::new(),
            dialog,
            roster,
            status_message: None,
            directory,
            task_manager,
            background_action_rx,
            logger,
            in_flight: 0,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Check if any directory request is still outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Load with the configured default search
    pub fn trigger_initial_load(&mut self) {
        self.logger.log(format!(
            "AppComponent: initial load by {}",
            self.roster.search().to_directory_query().describe()
        ));
        self.start_load(self.roster.search().clone());
    }

    fn start_load(&mut self, search: SearchQuery) {
        let query = search.to_directory_query();
        let ticket = self.roster.begin_load(search);
        self.logger.log(format!(
            "Load #{} requested: {}",
            ticket.generation(),
            query.describe()
        ));
        self.task_manager.spawn_load(self.directory.clone(), ticket, query);
        self.in_flight += 1;
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.employee_list
            .update_data(self.roster.projection().clone(), self.roster.status().clone());
    }

    fn show_error(&mut self, message: String) {
        self.logger.log(format!("Error: {}", message));
        self.show_notice(DialogType::Error(message));
    }

    /// Open an error or info dialog, or fall back to the status line when another dialog is open.
    fn show_notice(&mut self, notice: DialogType) {
        if self.dialog.is_visible() {
            // Do not replace a dialog the user is working in
            if let DialogType::Error(message) | DialogType::Info(message) = notice {
                self.status_message = Some(message);
            }
        } else {
            self.dialog.update(Action::ShowDialog(notice));
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('/') => {
                self.search_bar.focus();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }

            Action::NextPage => {
                self.roster.next_page();
                Action::None
            }
            Action::PreviousPage => {
                self.roster.previous_page();
                Action::None
            }
            Action::FirstPage => {
                self.roster.first_page();
                Action::None
            }
            Action::LastPage => {
                self.roster.last_page();
                Action::None
            }
            Action::CyclePageSize => {
                self.roster.cycle_page_size();
                self.logger
                    .log(format!("Page size set to {}", self.roster.page().page_size));
                Action::None
            }

            Action::Search(query) => {
                self.start_load(query);
                Action::None
            }
            Action::Refresh => {
                self.start_load(self.roster.search().clone());
                Action::None
            }

            Action::CreateEmployees(drafts) => {
                if drafts.is_empty() {
                    return Action::None;
                }
                self.logger.log(format!("Creating {} employee(s)", drafts.len()));
                self.task_manager.spawn_create(self.directory.clone(), drafts);
                self.in_flight += 1;
                Action::None
            }
            Action::EditEmployee(patch) => {
                let current = self.roster.employees().iter().find(|e| e.employee_id == patch.employee_id).cloned();
                match current {
                    Some(mut updated) => {
                        updated.apply_patch(&patch);
                        self.logger.log(format!("Updating employee {}", patch.employee_id));
                        self.task_manager.spawn_update(self.directory.clone(), updated, patch);
                        self.in_flight += 1;
                    }
                    None => self.show_error(ERROR_NO_EMPLOYEE_SELECTED.to_string()),
                }
                Action::None
            }
            Action::SaveAddresses { employee_id, addresses } => {
                let current = self.roster.employees().iter().find(|e| e.employee_id == employee_id).cloned();
                match current {
                    Some(mut updated) => {
                        updated.set_addresses(addresses);
                        self.logger.log(format!(
                            "Saving {} address(es) of employee {}",
                            updated.addresses.len(),
                            employee_id
                        ));
                        self.task_manager.spawn_save_addresses(self.directory.clone(), updated);
                        self.in_flight += 1;
                    }
                    None => self.show_error(ERROR_NO_EMPLOYEE_SELECTED.to_string()),
                }
                Action::None
            }
            Action::DeleteEmployee { employee_id, index } => {
                self.logger
                    .log(format!("Deleting employee {} (row {})", employee_id, index));
                self.task_manager.spawn_delete(self.directory.clone(), employee_id, index);
                self.in_flight += 1;
                Action::None
            }

            Action::EmployeesLoaded { ticket, result } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match result {
                    Ok(employees) => {
                        let count = employees.len();
                        if self.roster.apply_loaded(ticket, employees) {
                            self.logger
                                .log(format!("Load #{} applied: {} employee(s)", ticket.generation(), count));
                        } else {
                            self.logger
                                .log(format!("Load #{} ignored: a newer load is pending", ticket.generation()));
                        }
                    }
                    Err(e) => {
                        let message = format!("{}: {}", ERROR_LOAD_FAILED, e);
                        if self.roster.apply_load_failed(ticket, message.clone()) {
                            self.show_error(message);
                        }
                    }
                }
                Action::None
            }
            Action::EmployeesCreated { created, failures } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                let count = created.len();
                self.roster.append_created(created);
                if count > 0 {
                    self.logger.log(format!("Created {} employee(s)", count));
                    let message = if count == 1 {
                        SUCCESS_EMPLOYEE_CREATED
                    } else {
                        SUCCESS_EMPLOYEES_CREATED
                    };
                    self.status_message = Some(message.to_string());
                }
                if !failures.is_empty() {
                    if count == 0 {
                        self.show_error(failures.join("\n"));
                    } else {
                        // Partial batch: report what was created alongside what was not
                        let summary = format!(
                            "Created {} of {} employee(s).\n\n{}",
                            count,
                            count + failures.len(),
                            failures.join("\n")
                        );
                        self.show_notice(DialogType::Info(summary));
                    }
                }
                Action::None
            }
            Action::EmployeeUpdated(patch) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.roster.apply_patch(&patch) {
                    self.status_message = Some(SUCCESS_EMPLOYEE_UPDATED.to_string());
                } else {
                    self.logger
                        .log(format!("Updated employee {} is no longer listed", patch.employee_id));
                }
                Action::None
            }
            Action::AddressesSaved { employee_id, addresses } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                if self.roster.apply_addresses(&employee_id, addresses) {
                    self.status_message = Some(SUCCESS_ADDRESSES_UPDATED.to_string());
                }
                Action::None
            }
            Action::EmployeeDeleted { employee_id, index } => {
                self.in_flight = self.in_flight.saturating_sub(1);
                match self.roster.remove_deleted(&employee_id, index) {
                    Some(removed) => {
                        self.logger.log(format!("Removed {} from the list", removed.full_name()));
                        self.status_message = Some(SUCCESS_EMPLOYEE_DELETED.to_string());
                    }
                    None => self
                        .logger
                        .log(format!("Deleted employee {} was not in the list", employee_id)),
                }
                Action::None
            }
            Action::OperationFailed(message) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.show_error(message);
                Action::None
            }

            // Consumed by the dialog component
            Action::ShowDialog(_) | Action::HideDialog | Action::None => Action::None,
        }
    }

    /// Route one action through the components, then the app.
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);
        self.sync_component_data();
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        // Clean up finished tasks
        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed_tasks.len());
        }

        actions
    }

    /// Wait until every outstanding directory request has completed and been applied.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.background_action_rx.recv().await {
                Some(action) => self.dispatch(action),
                None => break,
            }
        }
        self.task_manager.cleanup_finished_tasks();
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => {
                self.status_message = None;
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else if self.search_bar.is_focused() {
                    self.search_bar.handle_key_events(key)
                } else {
                    let list_action = self.employee_list.handle_key_events(key);
                    if !matches!(list_action, Action::None) {
                        list_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        Ok(())
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // This shouldn't be called directly - use handle_event instead
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.search_bar.update(action);
        self.employee_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.search_bar.render(f, areas.search);
        self.employee_list.render(f, areas.table);
        StatusBar::render(
            f,
            areas.status,
            self.roster.status(),
            self.in_flight,
            self.status_message.as_deref(),
        );

        if self.roster.is_loading() {
            self.render_loading_indicator(f, areas.table);
        }

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

impl AppComponent {
    fn render_loading_indicator(&self, f: &mut Frame, rect: Rect) {
        use ratatui::{
            layout::Alignment,
            style::{Color, Style},
            text::{Line, Span},
            widgets::{Block, Borders, Clear, Paragraph},
        };

        let popup_area = LayoutManager::centered_rect_lines(40, 3, rect);

        let content = Paragraph::new(Line::from(Span::styled(
            format!("⟳ Loading employees by {}...", self.roster.search().criterion.label()),
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}
