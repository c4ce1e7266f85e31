use crate::domain::entities::blog_post::{BlogPostDraft, PostBrief};
use crate::domain::error::DomainError;
use crate::domain::ports::auth_provider::AuthProvider;
use crate::domain::ports::content_generator::ContentGenerator;
use crate::domain::values::share::slugify;
use std::sync::Arc;

const DEFAULT_WORD_COUNT: u32 = 1000;
const MAX_EXCERPT_LEN: usize = 200;
const MIN_EXCERPT_LEN: usize = 50;

pub struct DraftPostUseCase {
    generator: Arc<dyn ContentGenerator>,
    auth: Arc<dyn AuthProvider>,
}

impl DraftPostUseCase {
    pub fn new(generator: Arc<dyn ContentGenerator>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { generator, auth }
    }

    pub async fn execute(&self, brief: &PostBrief) -> Result<BlogPostDraft, DomainError> {
        let user = self.auth.current_user().ok_or(DomainError::Unauthenticated)?;
        if !user.is_admin {
            return Err(DomainError::Forbidden(format!(
                "{} cannot draft blog posts",
                user.email
            )));
        }
        let title = brief.title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("Post title is required".into()));
        }

        tracing::info!(generator = self.generator.name(), title, "drafting blog post");
        let content = self.generator.generate(&build_prompt(brief)).await?;
        let content = content.trim().to_string();

        Ok(BlogPostDraft {
            title: title.to_string(),
            slug: slugify(title, "post"),
            excerpt: excerpt(&content, title),
            content,
        })
    }
}

/// pt-BR instructions for a Markdown article.
pub fn build_prompt(brief: &PostBrief) -> String {
    let word_count = brief.word_count.unwrap_or(DEFAULT_WORD_COUNT);
    let mut prompt = format!(
        "Crie um artigo de blog completo e profissional em português brasileiro sobre \"{}\".\n\n",
        brief.title.trim()
    );
    if let Some(topic) = brief.topic.as_deref().filter(|t| !t.trim().is_empty()) {
        prompt.push_str(&format!("TEMA/ASSUNTO: {}\n", topic.trim()));
    }
    if let Some(description) = brief.description.as_deref().filter(|d| !d.trim().is_empty()) {
        prompt.push_str(&format!("DESCRIÇÃO: {}\n", description.trim()));
    }
    prompt.push_str("\nINSTRUÇÕES:\n");
    prompt.push_str(&format!(
        "- O artigo deve ter aproximadamente {word_count} palavras\n"
    ));
    prompt.push_str("- Use formatação Markdown (títulos com #, listas, negrito, itálico, etc.)\n");
    prompt.push_str("- Seja informativo, útil e otimizado para SEO\n");
    prompt.push_str(
        "- Inclua seções como: introdução, desenvolvimento do tema, exemplos práticos, conclusão\n",
    );
    prompt.push_str("- Use linguagem natural, envolvente e acessível\n");
    let keywords: Vec<&str> = brief
        .keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();
    if !keywords.is_empty() {
        prompt.push_str(&format!("- Palavras-chave: {}\n", keywords.join(", ")));
    }
    prompt.push_str(
        "\nGere o conteúdo completo do artigo em Markdown, sendo detalhado, informativo e bem estruturado.",
    );
    prompt
}

fn strip_markdown(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let hashes = line.len() - line.trim_start_matches('#').len();
            let rest = &line[hashes..];
            if hashes > 0 && rest.starts_with(char::is_whitespace) {
                rest.trim_start()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        .replace('*', "")
        .trim()
        .to_string()
}

/// Summary shown on the blog index: the first paragraph of the plain text,
/// capped at 200 characters, padded with a lead-in when very short.
pub fn excerpt(content: &str, title: &str) -> String {
    let plain = strip_markdown(content);
    let first = plain.split("\n\n").next().unwrap_or_default().trim();
    let len = first.chars().count();
    if len > MAX_EXCERPT_LEN {
        let cut: String = first.chars().take(MAX_EXCERPT_LEN - 3).collect();
        return format!("{cut}...");
    }
    if len < MIN_EXCERPT_LEN {
        return format!("Leia mais sobre {title}. {first}").trim_end().to_string();
    }
    first.to_string()
}
