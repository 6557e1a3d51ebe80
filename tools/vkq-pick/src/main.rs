use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use vkq_select::{select_queue_family, QueueFlags, QueueProfile};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Prefer a dedicated transfer queue family.
    Transfer,
    /// Prefer a dedicated compute queue family.
    Compute,
}

impl From<Profile> for QueueProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Transfer => QueueProfile::PreferTransfer,
            Profile::Compute => QueueProfile::PreferCompute,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vkq-pick")]
#[command(about = "Pick the best Vulkan queue family for a capability profile")]
struct Cli {
    /// Capability profile to match against.
    #[arg(long, value_enum)]
    profile: Profile,

    /// One queue family per argument, in device order: either a raw
    /// VkQueueFlags value (decimal or 0x-prefixed hex, e.g. from vulkaninfo)
    /// or a comma-separated capability list such as `graphics,compute`.
    families: Vec<String>,
}

fn parse_family(spec: &str) -> Result<QueueFlags> {
    if let Some(hex) = spec.strip_prefix("0x").or_else(|| spec.strip_prefix("0X")) {
        let raw = u32::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex flags value `{spec}`"))?;
        return Ok(QueueFlags::from_raw(raw));
    }
    if spec.chars().all(|c| c.is_ascii_digit()) {
        let raw: u32 = spec
            .parse()
            .with_context(|| format!("invalid flags value `{spec}`"))?;
        return Ok(QueueFlags::from_raw(raw));
    }

    let mut flags = QueueFlags::empty();
    for name in spec.split(',') {
        flags |= match name.trim() {
            "graphics" | "g" => QueueFlags::GRAPHICS,
            "compute" | "c" => QueueFlags::COMPUTE,
            "transfer" | "t" => QueueFlags::TRANSFER,
            "sparse-binding" | "sparse" | "s" => QueueFlags::SPARSE_BINDING,
            other => bail!("unknown capability `{other}` in `{spec}`"),
        };
    }
    Ok(flags)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let families = cli
        .families
        .iter()
        .map(|spec| parse_family(spec))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(?families, "parsed queue family pool");

    let index = select_queue_family(&families, cli.profile.into())?;
    println!("{index}");
    Ok(())
}
