use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::job::{self, JobDescriptor};
use crate::model::{
    ArtifactKind, ArtifactSet, InputCollection, PipelineSettings, Selection, ViewSettings,
};

use super::Result;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    inputs: InputCollection,
    artifacts: ArtifactSet,
    view: ViewSettings,
    settings: PipelineSettings,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: PipelineSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn inputs(&self) -> &InputCollection {
        &self.inputs
    }

    pub fn artifacts(&self) -> &ArtifactSet {
        &self.artifacts
    }

    pub fn view(&self) -> &ViewSettings {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewSettings {
        &mut self.view
    }

    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PipelineSettings {
        &mut self.settings
    }

    pub fn add_inputs(&mut self, selection: &Selection) {
        self.inputs.add_many(selection);
        debug!("input selection: {selection:?}");
        debug!("device paths now: {:?}", self.inputs.device_paths());
    }

    pub fn remove_input(&mut self, index: usize) -> Result<()> {
        self.inputs.remove_at(index)?;
        debug!("input {index} removed, {} remaining", self.inputs.len());
        Ok(())
    }

    pub fn select_artifact(&mut self, kind: ArtifactKind, selection: &Selection) {
        self.artifacts.select(kind, selection);
        debug!("{} selection: {selection:?}", kind.label());
    }

    pub fn clear_artifact(&mut self, kind: ArtifactKind) {
        self.artifacts.clear(kind);
    }

    pub fn set_view_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.view.set_named(name, value)?;
        Ok(())
    }

    pub fn set_settings_field(&mut self, name: &str, value: &str) -> Result<()> {
        self.settings.set_named(name, value)?;
        Ok(())
    }

    pub fn assemble(&self) -> JobDescriptor {
        job::assemble(&self.inputs, &self.artifacts, &self.view, &self.settings)
    }

    pub async fn generate(&self, dispatcher: &Dispatcher) -> Result<String> {
        let job = self.assemble();
        job.validate()?;
        Ok(dispatcher.submit(&job).await?)
    }
}
