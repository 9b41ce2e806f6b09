use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::NaiveTime;

use crate::modules::time_entries::core::edit_buffer::{BufferEdit, EditBuffer};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSelection {
    pub key: ID,
    pub task: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<EditBuffer> for GqlSelection {
    fn from(v: EditBuffer) -> Self {
        Self {
            key: ID(v.key),
            task: v.task,
            start_time: v.start_time,
            end_time: v.end_time,
        }
    }
}

#[derive(Default)]
pub struct SelectionQuery;

#[Object]
impl SelectionQuery {
    /// The row currently being edited, with its pending changes.
    async fn selection(&self, context: &Context<'_>) -> GqlResult<Option<GqlSelection>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.editor.selection().await.map(Into::into))
    }
}

#[derive(Default)]
pub struct EditorMutation;

#[Object]
impl EditorMutation {
    /// Selects `key`, or clears the selection when omitted. The previous row is committed.
    async fn select_time_entry(
        &self,
        context: &Context<'_>,
        key: Option<ID>,
    ) -> GqlResult<Option<GqlSelection>> {
        let state = context.data_unchecked::<AppState>();
        let selection = state
            .editor
            .select(key.as_ref().map(|key| key.as_str()))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(selection.map(Into::into))
    }

    async fn edit_selection(
        &self,
        context: &Context<'_>,
        task: Option<String>,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
    ) -> GqlResult<GqlSelection> {
        let state = context.data_unchecked::<AppState>();
        let buffer = state
            .editor
            .edit(BufferEdit {
                task,
                start_time,
                end_time,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(buffer.into())
    }

    async fn delete_time_entry(&self, context: &Context<'_>, key: ID) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        state
            .editor
            .delete(&key)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(key)
    }
}
