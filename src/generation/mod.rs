//! Essay fetching: one exchange per prompt, strictly in order.

use tracing::{debug, warn};

use crate::error::Result;
use crate::provider::TextGenerator;
use crate::types::{Essay, GenerationRequest, GenerationSettings};

/// Separator placed between generated sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Fetch every prompt of `request` and join the results.
///
/// The first failing exchange aborts the fetch: sections already generated
/// are dropped and remaining prompts are not sent. An essay shorter than
/// `required_words` is still returned, with a warning attached.
pub async fn fetch_essay(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
    settings: &GenerationSettings,
    required_words: usize,
) -> Result<Essay> {
    let mut sections = Vec::with_capacity(request.prompts.len());
    for (index, prompt) in request.prompts.iter().enumerate() {
        debug!(
            provider = generator.provider_name(),
            model = generator.model_id(),
            section = index + 1,
            of = request.prompts.len(),
            "requesting essay section"
        );
        sections.push(generator.generate(prompt, settings).await?);
    }

    let essay = Essay::new(sections.join(SECTION_SEPARATOR), required_words);
    if let Some(warning) = &essay.warning {
        warn!(
            observed = warning.observed,
            required = warning.required,
            "generated essay is shorter than requested"
        );
    }
    Ok(essay)
}
