use sbom_cli::prelude::*;

/// Mock OutputPresenter that keeps everything it is asked to print
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub outputs: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn last_output(&self) -> Option<String> {
        self.outputs.lock().unwrap().last().cloned()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.outputs.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
