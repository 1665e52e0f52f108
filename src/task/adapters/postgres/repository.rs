//! `PostgreSQL` repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow},
    schema::tasks,
};
use crate::db::PgPool;
use crate::task::{
    domain::{Deadline, NewTask, PersistedTaskData, Task, TaskId, TaskStatus, TaskText},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(tasks::id.desc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_user_id(&self, user_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::user_id.eq(user_id.value()))
                .order(tasks::id.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn create(&self, task: &NewTask) -> TaskRepositoryResult<Task> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(tasks::table)
                .values(&new_row)
                .returning(TaskRow::as_returning())
                .get_result::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update_status(&self, id: TaskId, status: &TaskStatus) -> TaskRepositoryResult<()> {
        let status_val = status.as_str().to_owned();
        self.run_blocking(move |connection| {
            let updated_count = diesel::update(tasks::table.filter(tasks::id.eq(id.value())))
                .set(tasks::status.eq(&status_val))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        user_id: task.owner_id().value(),
        icon: task.icon().to_owned(),
        text: task.text().as_str().to_owned(),
        date_info: task.deadline().map(|deadline| deadline.as_str().to_owned()),
        status: task.status().as_str().to_owned(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        user_id,
        icon,
        text,
        date_info,
        status,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(id),
        user_id: UserId::new(user_id),
        icon,
        text: TaskText::new(text).map_err(TaskRepositoryError::persistence)?,
        deadline: date_info.and_then(Deadline::new),
        status: TaskStatus::new(status).map_err(TaskRepositoryError::persistence)?,
    };
    Ok(Task::from_persisted(data))
}
