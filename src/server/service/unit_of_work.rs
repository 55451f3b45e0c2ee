//! Transaction wrapper with explicit post-commit side effects.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

type PostCommitHook = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A database transaction carrying a list of side effects that must only
/// run once the store confirms the write.
///
/// Hooks are spawned (not awaited) after a successful commit: they cannot
/// block the response or roll back the transaction, so each hook owns its
/// error reporting. Dropping the unit of work without calling `commit`
/// rolls back the transaction and discards the hooks.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
    after_commit: Vec<PostCommitHook>,
}

impl UnitOfWork {
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self {
            txn: db.begin().await?,
            after_commit: Vec::new(),
        })
    }

    /// The open transaction, for repositories participating in this unit.
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Registers a side effect to run after a successful commit.
    pub fn after_commit<F>(&mut self, hook: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.after_commit.push(Box::pin(hook));
    }

    /// Commits the transaction, then spawns every registered hook.
    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await?;

        for hook in self.after_commit {
            tokio::spawn(hook);
        }

        Ok(())
    }
}
