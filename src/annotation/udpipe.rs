//! UDPipe REST service annotator.
//!
//! Posts each text to `<endpoint>/process` and parses the returned CoNLL-U.
//! See <https://lindat.mff.cuni.cz/services/udpipe/api-reference.php>.
use log::debug;
use reqwest::Url;
use serde::Deserialize;

use crate::error::Error;
use crate::io::conllu;
use crate::lang::Lang;

use super::{AnnotatedDocument, Annotator, Processors};

pub const DEFAULT_ENDPOINT: &str = "https://lindat.mff.cuni.cz/services/udpipe/api";

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    #[serde(default)]
    model: Option<String>,
    result: String,
}

pub struct UdpipeService {
    client: reqwest::blocking::Client,
    url: Url,
    model: String,
    processors: Processors,
}

impl UdpipeService {
    /// Create a new service annotator.
    ///
    /// `model` defaults to the language model prefix (for example `english`).
    pub fn new(
        endpoint: &str,
        lang: Lang,
        model: Option<String>,
        processors: Processors,
    ) -> Result<Self, Error> {
        let mut url = Url::parse(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| Error::Custom(format!("{} can't be a base url", endpoint)))?
            .pop_if_empty()
            .push("process");

        let model = model.unwrap_or_else(|| lang.udpipe_model().to_string());
        debug!("udpipe: {} with model {} ({})", url, model, processors);

        Ok(Self {
            client: reqwest::blocking::Client::new(),
            url,
            model,
            processors,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Form fields of a process request.
    fn form<'a>(&'a self, text: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut form = vec![
            ("model", self.model.as_str()),
            ("tokenizer", ""),
            ("output", "conllu"),
        ];
        if self.processors.needs_tagger() {
            form.push(("tagger", ""));
        }
        form.push(("data", text));
        form
    }

    fn parse_response(&self, body: &str) -> Result<AnnotatedDocument, Error> {
        let response: ProcessResponse = serde_json::from_str(body)?;
        if let Some(model) = &response.model {
            debug!("processed with {}", model);
        }

        let mut doc = conllu::parse_document(&response.result)?;
        self.processors.mask(&mut doc);
        Ok(doc)
    }
}

impl Annotator for UdpipeService {
    fn processors(&self) -> &Processors {
        &self.processors
    }

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Error> {
        let response = self
            .client
            .post(self.url.clone())
            .form(&self.form(text))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::Annotation(format!(
                "udpipe returned {}: {}",
                status,
                body.trim()
            )));
        }

        self.parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(processors: &str) -> UdpipeService {
        UdpipeService::new(
            "https://example.org/udpipe/api/",
            Lang::Fr,
            None,
            processors.parse().unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn url_and_model() {
        let s = service("tokenize");
        assert_eq!(s.url().as_str(), "https://example.org/udpipe/api/process");
        assert_eq!(s.model(), "french");

        let s = UdpipeService::new(
            DEFAULT_ENDPOINT,
            Lang::Fr,
            Some("french-gsd-ud-2.12-230717".to_string()),
            Processors::default(),
        )
        .unwrap();
        assert_eq!(s.model(), "french-gsd-ud-2.12-230717");
    }

    #[test]
    fn form_fields() {
        let keys = |s: &UdpipeService| -> Vec<&'static str> {
            s.form("Bonjour.").into_iter().map(|(k, _)| k).collect()
        };
        assert_eq!(
            keys(&service("tokenize")),
            vec!["model", "tokenizer", "output", "data"]
        );
        assert_eq!(
            keys(&service("tokenize,lemma")),
            vec!["model", "tokenizer", "output", "tagger", "data"]
        );
    }

    #[test]
    fn response() {
        let body = serde_json::json!({
            "model": "french-gsd-ud-2.12-230717",
            "acknowledgements": ["http://ufal.mff.cuni.cz/udpipe/2#udpipe2_acknowledgements"],
            "result": "# newdoc\n# newpar\n# sent_id = 1\n# text = Bonjour.\n1\tBonjour\tbonjour\tINTJ\t_\t_\t0\troot\t_\tSpaceAfter=No\n2\t.\t.\tPUNCT\t_\t_\t1\tpunct\t_\tSpaceAfter=No\n\n"
        })
        .to_string();

        let doc = service("tokenize,lemma").parse_response(&body).unwrap();
        let sentence = &doc.sentences[0];
        assert_eq!(sentence.text, "Bonjour.");
        assert_eq!(sentence.tokens[0].lemma.as_deref(), Some("bonjour"));
        assert_eq!(sentence.tokens[0].upos, None);
        assert_eq!(sentence.tokens[0].head, None);
    }

    #[test]
    fn malformed_response() {
        let s = service("tokenize");
        assert!(matches!(s.parse_response("oops"), Err(Error::Serde(_))));

        let body = serde_json::json!({"result": "1\tBonjour\n\n"}).to_string();
        assert!(matches!(s.parse_response(&body), Err(Error::Conllu(_))));
    }
}
