use std::sync::Arc;

use crate::schema::PokedexSchema;

struct ServerStateInner {
    schema: PokedexSchema,
    graph_path: String,
    playground: bool,
}

#[derive(Clone)]
pub(super) struct ServerState {
    inner: Arc<ServerStateInner>,
}

impl ServerState {
    pub(super) fn new(schema: PokedexSchema, graph_path: String, playground: bool) -> Self {
        Self {
            inner: Arc::new(ServerStateInner {
                schema,
                graph_path,
                playground,
            }),
        }
    }

    pub(super) fn schema(&self) -> &PokedexSchema {
        &self.inner.schema
    }

    pub(super) fn graph_path(&self) -> &str {
        &self.inner.graph_path
    }

    pub(super) fn playground(&self) -> bool {
        self.inner.playground
    }
}
