use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    HoverSelect,
    ResizeRecompute,
}

#[derive(Debug, Clone, PartialEq)]
struct ScheduledTask<A> {
    due: Duration,
    action: A,
}

/// 以用途為鍵的一次性延遲任務；同一個鍵只保留最新排程的任務。
///
/// 時間以「自啟動以來的經過時間」表示，由呼叫端提供，方便在測試中推進。
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    tasks: HashMap<TaskKey, ScheduledTask<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 排程任務，回傳被取代的舊任務是否存在
    pub fn schedule(&mut self, key: TaskKey, now: Duration, delay: Duration, action: A) -> bool {
        let replaced = self
            .tasks
            .insert(
                key,
                ScheduledTask {
                    due: now + delay,
                    action,
                },
            )
            .is_some();
        if replaced {
            tracing::debug!("Replaced pending {:?} task", key);
        }
        replaced
    }

    pub fn cancel(&mut self, key: TaskKey) -> bool {
        self.tasks.remove(&key).is_some()
    }

    pub fn is_pending(&self, key: TaskKey) -> bool {
        self.tasks.contains_key(&key)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.tasks.values().map(|t| t.due).min()
    }

    /// 取出所有到期的任務，依到期時間排序
    pub fn take_due(&mut self, now: Duration) -> Vec<(TaskKey, A)> {
        let due_keys: Vec<TaskKey> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= now)
            .map(|(key, _)| *key)
            .collect();

        let mut fired: Vec<(Duration, TaskKey, A)> = due_keys
            .into_iter()
            .filter_map(|key| self.tasks.remove(&key).map(|t| (t.due, key, t.action)))
            .collect();
        fired.sort_by_key(|(due, _, _)| *due);
        fired.into_iter().map(|(_, key, action)| (key, action)).collect()
    }
}
