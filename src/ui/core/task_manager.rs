use super::actions::Action;
use crate::directory::{DirectoryQuery, DirectoryService};
use crate::entities::{Employee, EmployeePatch, NewEmployee};
use crate::roster::LoadTicket;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs directory calls off the UI loop and reports back through an action channel.
///
/// Every spawned operation sends exactly one completion [`Action`].
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn<Fut>(&mut self, description: String, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = operation.await;
            let _ = action_sender.send(action);
        });

        log::debug!("Spawned background task {}: {}", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    /// Spawn one remote read for `query`.
    pub fn spawn_load(
        &mut self,
        directory: Arc<dyn DirectoryService>,
        ticket: LoadTicket,
        query: DirectoryQuery,
    ) -> TaskId {
        let description = format!("Load employees by {}", query.describe());
        self.spawn(description, async move {
            let result = query.execute(directory.as_ref()).await;
            Action::EmployeesLoaded { ticket, result }
        })
    }

    /// Spawn creation of every draft, in order. Failures are collected, not fatal.
    pub fn spawn_create(&mut self, directory: Arc<dyn DirectoryService>, drafts: Vec<NewEmployee>) -> TaskId {
        let description = format!("Create {} employee(s)", drafts.len());
        self.spawn(description, async move {
            let mut created = Vec::new();
            let mut failures = Vec::new();
            for draft in drafts {
                let name = format!("{} {}", draft.first_name, draft.last_name);
                match directory.create_employee(draft).await {
                    Ok(employee) => created.push(employee),
                    Err(e) => failures.push(format!("{} {}: {}", crate::constants::ERROR_CREATE_FAILED, name, e)),
                }
            }
            Action::EmployeesCreated { created, failures }
        })
    }

    /// Spawn a name update; `employee` already carries the patched names.
    pub fn spawn_update(
        &mut self,
        directory: Arc<dyn DirectoryService>,
        employee: Employee,
        patch: EmployeePatch,
    ) -> TaskId {
        let description = format!("Update employee {}", employee.employee_id);
        self.spawn(description, async move {
            match directory.update_employee(&employee).await {
                Ok(_) => Action::EmployeeUpdated(patch),
                Err(e) => Action::OperationFailed(format!("{}: {}", crate::constants::ERROR_UPDATE_FAILED, e)),
            }
        })
    }

    /// Spawn an address list update; `employee` already carries the new addresses.
    pub fn spawn_save_addresses(&mut self, directory: Arc<dyn DirectoryService>, employee: Employee) -> TaskId {
        let description = format!("Save addresses of employee {}", employee.employee_id);
        self.spawn(description, async move {
            match directory.update_employee(&employee).await {
                Ok(_) => Action::AddressesSaved {
                    employee_id: employee.employee_id,
                    addresses: employee.addresses,
                },
                Err(e) => Action::OperationFailed(format!("{}: {}", crate::constants::ERROR_ADDRESSES_FAILED, e)),
            }
        })
    }

    pub fn spawn_delete(&mut self, directory: Arc<dyn DirectoryService>, employee_id: String, index: usize) -> TaskId {
        let description = format!("Delete employee {}", employee_id);
        self.spawn(description, async move {
            match directory.delete_employee(&employee_id).await {
                Ok(()) => Action::EmployeeDeleted { employee_id, index },
                Err(e) => Action::OperationFailed(format!("{}: {}", crate::constants::ERROR_DELETE_FAILED, e)),
            }
        })
    }

    /// Drop handles of tasks that have finished; returns their ids.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Background task {} finished after {:?}: {}",
                    task.id,
                    task.started_at.elapsed(),
                    task.description
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MemoryDirectory;

    #[tokio::test]
    async fn test_create_reports_partial_failures() {
        let (mut manager, mut rx) = TaskManager::new();
        let directory: Arc<dyn DirectoryService> = Arc::new(MemoryDirectory::default());

        manager.spawn_create(
            directory,
            vec![NewEmployee::new("Ann", "Lee"), NewEmployee::new("", "Nobody")],
        );
        assert_eq!(manager.task_count(), 1);

        match rx.recv().await {
            Some(Action::EmployeesCreated { created, failures }) => {
                assert_eq!(created.len(), 1);
                assert_eq!(failures.len(), 1);
                assert!(failures[0].contains("Nobody"));
            }
            other => panic!("unexpected completion: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_finished_tasks_are_cleaned_up() {
        let (mut manager, mut rx) = TaskManager::new();
        let directory: Arc<dyn DirectoryService> = Arc::new(MemoryDirectory::default());

        manager.spawn_delete(directory, "missing".to_string(), 0);
        assert!(matches!(rx.recv().await, Some(Action::OperationFailed(_))));

        while manager.task_count() > 0 {
            tokio::task::yield_now().await;
            manager.cleanup_finished_tasks();
        }
    }
}
