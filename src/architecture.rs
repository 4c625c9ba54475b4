/// The following diagram shows how a request flows through the library, from the presentation
/// layer down to the completion endpoint and back.
///
/// Only [`DiagramWeaver`](crate::DiagramWeaver) touches the network, through whatever
/// [`Completer`](crate::Completer) it was built with.
#[cfg_attr(doc, aquamarine::aquamarine)]
/// ```mermaid
/// graph LR
///     subgraph Presentation
///         web[WebService]
///         terminal[TerminalService]
///     end
///     subgraph Diagram Weaver
///         weaver[DiagramWeaver]
///         prompt[build_prompt]
///         sanitize[sanitize]
///         completer>Completer]
///         groq[GroqCompleter]-. impl .- completer
///     end
///     settings[Settings] --> groq
///     web -- DiagramRequest --> weaver
///     terminal -- DiagramRequest --> weaver
///     weaver -- blank description --> empty[EmptyInput]
///     weaver --> prompt
///     weaver -- CompletionRequest --> completer
///     groq -- chat completion --> llm[(Groq API)]
///     weaver --> sanitize
///     weaver -- DiagramOutcome --> web
///     weaver -- DiagramOutcome --> terminal
/// ```
///
/// Applications that want to talk to another provider implement [`Completer`](crate::Completer)
/// and hand it to [`DiagramWeaver::new`](crate::DiagramWeaver::new). Everything else stays the same.
pub struct Diagram;
