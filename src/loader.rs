//! Load lifecycle for the resource set.

use crate::model::Resource;

/// The three mutually exclusive phases of a resource load. Exactly one is
/// ever displayed; there is no separate error or loading flag to fall out of
/// sync with it.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
	Loading,
	Failed(String),
	Loaded(Vec<Resource>),
}

/// Drives [`LoadState`] through start/finish transitions.
///
/// Each `start` hands out a fresh generation token and every completion must
/// present one. A completion with a stale token is discarded, so when a
/// retry is pressed while a request is still in flight, the most recently
/// started request wins regardless of arrival order.
#[derive(Clone, Debug)]
pub struct ResourceLoader {
	state: LoadState,
	generation: u64,
}

impl Default for ResourceLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ResourceLoader {
	/// A loader that is about to issue its first request.
	pub fn new() -> Self {
		Self {
			state: LoadState::Loading,
			generation: 0,
		}
	}

	pub fn state(&self) -> &LoadState {
		&self.state
	}

	/// Begin a load. Initial load and retry are the same transition. Returns
	/// the generation token the eventual completion must present.
	pub fn start(&mut self) -> u64 {
		self.generation += 1;
		self.state = LoadState::Loading;
		self.generation
	}

	/// Complete the load identified by `generation`. Success replaces the
	/// whole resource set and clears any previous error; failure records the
	/// message and commits no data. Returns false when the token is stale
	/// and the outcome was dropped.
	pub fn finish(&mut self, generation: u64, outcome: Result<Vec<Resource>, String>) -> bool {
		if generation != self.generation {
			return false;
		}
		self.state = match outcome {
			Ok(resources) => LoadState::Loaded(resources),
			Err(message) => LoadState::Failed(message),
		};
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn resource(id: &str) -> Resource {
		Resource {
			id: id.to_string(),
			key: id.to_string(),
			name: id.to_string(),
			description: None,
			actions: Default::default(),
			roles: Default::default(),
			relations: Default::default(),
		}
	}

	#[test]
	fn starts_out_loading() {
		let loader = ResourceLoader::new();
		assert!(matches!(loader.state(), LoadState::Loading));
	}

	#[test]
	fn successful_load_replaces_the_set_and_clears_loading() {
		let mut loader = ResourceLoader::new();
		let generation = loader.start();
		assert!(loader.finish(generation, Ok(vec![resource("r1")])));
		assert!(!matches!(loader.state(), LoadState::Loading));
		match loader.state() {
			LoadState::Loaded(resources) => assert_eq!(resources[0].id, "r1"),
			other => panic!("expected Loaded, got {:?}", other),
		}
	}

	#[test]
	fn failed_load_records_a_message_and_commits_no_data() {
		let mut loader = ResourceLoader::new();
		let generation = loader.start();
		assert!(loader.finish(generation, Err("request failed".into())));
		assert!(!matches!(loader.state(), LoadState::Loading));
		match loader.state() {
			LoadState::Failed(message) => assert!(!message.is_empty()),
			other => panic!("expected Failed, got {:?}", other),
		}
	}

	#[test]
	fn retry_after_failure_reenters_loading() {
		let mut loader = ResourceLoader::new();
		let generation = loader.start();
		loader.finish(generation, Err("boom".into()));
		loader.start();
		assert!(matches!(loader.state(), LoadState::Loading));
	}

	#[test]
	fn success_after_failure_clears_the_error() {
		let mut loader = ResourceLoader::new();
		let first = loader.start();
		loader.finish(first, Err("boom".into()));
		let second = loader.start();
		loader.finish(second, Ok(vec![resource("r2")]));
		assert!(matches!(loader.state(), LoadState::Loaded(_)));
	}

	#[test]
	fn stale_completion_is_discarded() {
		let mut loader = ResourceLoader::new();
		let first = loader.start();
		// Retry pressed while the first request is still in flight.
		let second = loader.start();

		assert!(!loader.finish(first, Ok(vec![resource("stale")])));
		assert!(matches!(loader.state(), LoadState::Loading));

		assert!(loader.finish(second, Err("second failed".into())));
		assert_eq!(loader.state(), &LoadState::Failed("second failed".into()));
	}

	#[test]
	fn stale_completion_after_a_win_does_not_overwrite() {
		let mut loader = ResourceLoader::new();
		let first = loader.start();
		let second = loader.start();

		loader.finish(second, Ok(vec![resource("fresh")]));
		assert!(!loader.finish(first, Ok(vec![resource("stale")])));

		match loader.state() {
			LoadState::Loaded(resources) => assert_eq!(resources[0].id, "fresh"),
			other => panic!("expected Loaded, got {:?}", other),
		}
	}
}
