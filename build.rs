use std::env;
use std::process::Command;

/// Environment variable that disables the register-backed backend.
const FORCE_FALLBACK_ENV: &str = "VECLY_FORCE_FALLBACK";

// CPU feature we want to detect
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Only AVX2 has a dedicated backend; everything else uses the generic vectors
    fn avx2() -> CpuFeature {
        CpuFeature {
            name: "avx2",
            cfg_flag: "avx2",
            detected: false,
        }
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_feature(&self, feature: &mut CpuFeature);
    fn is_applicable(&self) -> bool;

    // Detectors that inspect the build machine are only valid for native builds
    fn inspects_host(&self) -> bool {
        true
    }
}

// Target features requested explicitly, e.g. `-C target-feature=+avx2` or
// `-C target-cpu=native`. Works for cross builds too.
struct TargetFeatureDetector;
impl CpuFeatureDetector for TargetFeatureDetector {
    fn detect_feature(&self, feature: &mut CpuFeature) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        feature.detected = enabled.split(',').any(|f| f == feature.name);
    }

    fn is_applicable(&self) -> bool {
        env::var("CARGO_CFG_TARGET_FEATURE").is_ok()
    }

    fn inspects_host(&self) -> bool {
        false
    }
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_feature(&self, feature: &mut CpuFeature) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            feature.detected = cpuinfo
                .lines()
                .filter(|line| line.starts_with("flags"))
                .any(|line| line.split_whitespace().any(|flag| flag == feature.name));
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_feature(&self, feature: &mut CpuFeature) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if feature.name == "avx2" {
                feature.detected = contents.contains("hw.optional.avx2_0: 1");
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// Factory that creates the appropriate detector for the current build
struct PlatformDetector;
impl PlatformDetector {
    fn cpu_feature_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![
            Box::new(TargetFeatureDetector),
            Box::new(LinuxDetector),
            Box::new(MacOSDetector),
        ]
    }

    fn is_x86_target() -> bool {
        matches!(
            env::var("CARGO_CFG_TARGET_ARCH").as_deref(),
            Ok("x86") | Ok("x86_64")
        )
    }

    fn is_native_build() -> bool {
        let host = env::var("HOST").unwrap_or_default();
        let target = env::var("TARGET").unwrap_or_default();
        host == target
    }

    fn force_fallback() -> bool {
        env::var(FORCE_FALLBACK_ENV)
            .map(|value| !matches!(value.as_str(), "" | "0" | "false"))
            .unwrap_or(false)
    }

    fn detect_cpu_feature(feature: &mut CpuFeature) {
        for detector in Self::cpu_feature_detectors() {
            if !detector.is_applicable() || (detector.inspects_host() && !Self::is_native_build()) {
                continue;
            }
            detector.detect_feature(feature);
            if feature.detected {
                break;
            }
        }
    }

    fn apply(feature: &CpuFeature) {
        // if the feature is not detected, use the generic implementation
        let cfg_flag = if feature.detected {
            feature.cfg_flag
        } else {
            "fallback"
        };

        println!("applying: {cfg_flag}");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={FORCE_FALLBACK_ENV}");

    let mut feature = CpuFeature::avx2();

    if PlatformDetector::is_x86_target() && !PlatformDetector::force_fallback() {
        PlatformDetector::detect_cpu_feature(&mut feature);
    }

    PlatformDetector::apply(&feature);
}
