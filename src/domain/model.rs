/// The two greeting strings captured from the service, in capture order:
/// `greeting` from SayHelloStr, `personal_greeting` from SayHelloTo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingReport {
    pub greeting: String,
    pub personal_greeting: String,
}
