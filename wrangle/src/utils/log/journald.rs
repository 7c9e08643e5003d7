use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    subscriber.with(get_writer())
}

fn get_writer() -> Option<tracing_journald::Layer> {
    tracing_journald::layer()
        .map_err(|err| eprintln!("Couldn't setup journald logging, is journald running? {err}"))
        .ok()
}
