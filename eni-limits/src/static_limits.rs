//! Built-in instance-type limits used to seed the registry.
//!
//! Source: https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/using-eni.html#AvailableIpPerENI
//!
//! Generated from `aws ec2 describe-instance-types` (us-east-1) with:
//!
//! ```text
//! jq -r '.InstanceTypes[] | "(\"\(.InstanceType)\", \(.NetworkInfo.MaximumNetworkInterfaces), \(.NetworkInfo.Ipv4AddressesPerInterface), \(.NetworkInfo.Ipv6AddressesPerInterface), \"\(.Hypervisor)\"),"' | sort | sed "s/null//"
//! ```

use std::collections::HashMap;

use crate::limits::InstanceLimits;

/// `(instance type, adapters, IPv4 per adapter, IPv6 per adapter, hypervisor)`.
#[rustfmt::skip]
pub const STATIC_LIMITS: &[(&str, u32, u32, u32, &str)] = &[
    ("a1.2xlarge", 4, 15, 15, "nitro"),
    ("a1.4xlarge", 8, 30, 30, "nitro"),
    ("a1.large", 3, 10, 10, "nitro"),
    ("a1.medium", 2, 4, 4, "nitro"),
    ("a1.metal", 8, 30, 30, ""),
    ("a1.xlarge", 4, 15, 15, "nitro"),
    ("c1.medium", 2, 6, 0, "xen"),
    ("c1.xlarge", 4, 15, 0, "xen"),
    ("c3.2xlarge", 4, 15, 15, "xen"),
    ("c3.4xlarge", 8, 30, 30, "xen"),
    ("c3.8xlarge", 8, 30, 30, "xen"),
    ("c3.large", 3, 10, 10, "xen"),
    ("c3.xlarge", 4, 15, 15, "xen"),
    ("c4.2xlarge", 4, 15, 15, "xen"),
    ("c4.4xlarge", 8, 30, 30, "xen"),
    ("c4.8xlarge", 8, 30, 30, "xen"),
    ("c4.large", 3, 10, 10, "xen"),
    ("c4.xlarge", 4, 15, 15, "xen"),
    ("c5.12xlarge", 8, 30, 30, "nitro"),
    ("c5.18xlarge", 15, 50, 50, "nitro"),
    ("c5.24xlarge", 15, 50, 50, "nitro"),
    ("c5.2xlarge", 4, 15, 15, "nitro"),
    ("c5.4xlarge", 8, 30, 30, "nitro"),
    ("c5.9xlarge", 8, 30, 30, "nitro"),
    ("c5.large", 3, 10, 10, "nitro"),
    ("c5.metal", 15, 50, 50, ""),
    ("c5.xlarge", 4, 15, 15, "nitro"),
    ("c5a.12xlarge", 8, 30, 30, "nitro"),
    ("c5a.16xlarge", 15, 50, 50, "nitro"),
    ("c5a.24xlarge", 15, 50, 50, "nitro"),
    ("c5a.2xlarge", 4, 15, 15, "nitro"),
    ("c5a.4xlarge", 8, 30, 30, "nitro"),
    ("c5a.8xlarge", 8, 30, 30, "nitro"),
    ("c5a.large", 3, 10, 10, "nitro"),
    ("c5a.xlarge", 4, 15, 15, "nitro"),
    ("c5ad.12xlarge", 8, 30, 30, "nitro"),
    ("c5ad.16xlarge", 15, 50, 50, "nitro"),
    ("c5ad.24xlarge", 15, 50, 50, "nitro"),
    ("c5ad.2xlarge", 4, 15, 15, "nitro"),
    ("c5ad.4xlarge", 8, 30, 30, "nitro"),
    ("c5ad.8xlarge", 8, 30, 30, "nitro"),
    ("c5ad.large", 3, 10, 10, "nitro"),
    ("c5ad.xlarge", 4, 15, 15, "nitro"),
    ("c5d.12xlarge", 8, 30, 30, "nitro"),
    ("c5d.18xlarge", 15, 50, 50, "nitro"),
    ("c5d.24xlarge", 15, 50, 50, "nitro"),
    ("c5d.2xlarge", 4, 15, 15, "nitro"),
    ("c5d.4xlarge", 8, 30, 30, "nitro"),
    ("c5d.9xlarge", 8, 30, 30, "nitro"),
    ("c5d.large", 3, 10, 10, "nitro"),
    ("c5d.metal", 15, 50, 50, ""),
    ("c5d.xlarge", 4, 15, 15, "nitro"),
    ("c5n.18xlarge", 15, 50, 50, "nitro"),
    ("c5n.2xlarge", 4, 15, 15, "nitro"),
    ("c5n.4xlarge", 8, 30, 30, "nitro"),
    ("c5n.9xlarge", 8, 30, 30, "nitro"),
    ("c5n.large", 3, 10, 10, "nitro"),
    ("c5n.metal", 15, 50, 50, ""),
    ("c5n.xlarge", 4, 15, 15, "nitro"),
    ("c6a.12xlarge", 8, 30, 30, "nitro"),
    ("c6a.16xlarge", 15, 50, 50, "nitro"),
    ("c6a.24xlarge", 15, 50, 50, "nitro"),
    ("c6a.2xlarge", 4, 15, 15, "nitro"),
    ("c6a.32xlarge", 15, 50, 50, "nitro"),
    ("c6a.48xlarge", 15, 50, 50, "nitro"),
    ("c6a.4xlarge", 8, 30, 30, "nitro"),
    ("c6a.8xlarge", 8, 30, 30, "nitro"),
    ("c6a.large", 3, 10, 10, "nitro"),
    ("c6a.xlarge", 4, 15, 15, "nitro"),
    ("c6g.12xlarge", 8, 30, 30, "nitro"),
    ("c6g.16xlarge", 15, 50, 50, "nitro"),
    ("c6g.2xlarge", 4, 15, 15, "nitro"),
    ("c6g.4xlarge", 8, 30, 30, "nitro"),
    ("c6g.8xlarge", 8, 30, 30, "nitro"),
    ("c6g.large", 3, 10, 10, "nitro"),
    ("c6g.medium", 2, 4, 4, "nitro"),
    ("c6g.metal", 15, 50, 50, ""),
    ("c6g.xlarge", 4, 15, 15, "nitro"),
    ("c6gd.12xlarge", 8, 30, 30, "nitro"),
    ("c6gd.16xlarge", 15, 50, 50, "nitro"),
    ("c6gd.2xlarge", 4, 15, 15, "nitro"),
    ("c6gd.4xlarge", 8, 30, 30, "nitro"),
    ("c6gd.8xlarge", 8, 30, 30, "nitro"),
    ("c6gd.large", 3, 10, 10, "nitro"),
    ("c6gd.medium", 2, 4, 4, "nitro"),
    ("c6gd.metal", 15, 50, 50, ""),
    ("c6gd.xlarge", 4, 15, 15, "nitro"),
    ("c6gn.12xlarge", 8, 30, 30, "nitro"),
    ("c6gn.16xlarge", 15, 50, 50, "nitro"),
    ("c6gn.2xlarge", 4, 15, 15, "nitro"),
    ("c6gn.4xlarge", 8, 30, 30, "nitro"),
    ("c6gn.8xlarge", 8, 30, 30, "nitro"),
    ("c6gn.large", 3, 10, 10, "nitro"),
    ("c6gn.medium", 2, 4, 4, "nitro"),
    ("c6gn.xlarge", 4, 15, 15, "nitro"),
    ("c6i.12xlarge", 8, 30, 30, "nitro"),
    ("c6i.16xlarge", 15, 50, 50, "nitro"),
    ("c6i.24xlarge", 15, 50, 50, "nitro"),
    ("c6i.2xlarge", 4, 15, 15, "nitro"),
    ("c6i.32xlarge", 15, 50, 50, "nitro"),
    ("c6i.4xlarge", 8, 30, 30, "nitro"),
    ("c6i.8xlarge", 8, 30, 30, "nitro"),
    ("c6i.large", 3, 10, 10, "nitro"),
    ("c6i.metal", 15, 50, 50, ""),
    ("c6i.xlarge", 4, 15, 15, "nitro"),
    ("cc2.8xlarge", 8, 30, 0, "xen"),
    ("d2.2xlarge", 4, 15, 15, "xen"),
    ("d2.4xlarge", 8, 30, 30, "xen"),
    ("d2.8xlarge", 8, 30, 30, "xen"),
    ("d2.xlarge", 4, 15, 15, "xen"),
    ("d3.2xlarge", 4, 5, 5, "nitro"),
    ("d3.4xlarge", 4, 10, 10, "nitro"),
    ("d3.8xlarge", 3, 20, 20, "nitro"),
    ("d3.xlarge", 4, 3, 3, "nitro"),
    ("d3en.12xlarge", 3, 30, 30, "nitro"),
    ("d3en.2xlarge", 4, 5, 5, "nitro"),
    ("d3en.4xlarge", 4, 10, 10, "nitro"),
    ("d3en.6xlarge", 4, 15, 15, "nitro"),
    ("d3en.8xlarge", 4, 20, 20, "nitro"),
    ("d3en.xlarge", 4, 3, 3, "nitro"),
    ("dl1.24xlarge", 60, 50, 50, "nitro"),
    ("f1.16xlarge", 8, 50, 50, "xen"),
    ("f1.2xlarge", 4, 15, 15, "xen"),
    ("f1.4xlarge", 8, 30, 30, "xen"),
    ("g2.2xlarge", 4, 15, 0, "xen"),
    ("g2.8xlarge", 8, 30, 0, "xen"),
    ("g3.16xlarge", 15, 50, 50, "xen"),
    ("g3.4xlarge", 8, 30, 30, "xen"),
    ("g3.8xlarge", 8, 30, 30, "xen"),
    ("g3s.xlarge", 4, 15, 15, "xen"),
    ("g4ad.16xlarge", 8, 30, 30, "nitro"),
    ("g4ad.2xlarge", 2, 4, 4, "nitro"),
    ("g4ad.4xlarge", 3, 10, 10, "nitro"),
    ("g4ad.8xlarge", 4, 15, 15, "nitro"),
    ("g4ad.xlarge", 2, 4, 4, "nitro"),
    ("g4dn.12xlarge", 8, 30, 30, "nitro"),
    ("g4dn.16xlarge", 4, 15, 15, "nitro"),
    ("g4dn.2xlarge", 3, 10, 10, "nitro"),
    ("g4dn.4xlarge", 3, 10, 10, "nitro"),
    ("g4dn.8xlarge", 4, 15, 15, "nitro"),
    ("g4dn.metal", 15, 50, 50, ""),
    ("g4dn.xlarge", 3, 10, 10, "nitro"),
    ("g5.12xlarge", 15, 50, 50, "nitro"),
    ("g5.16xlarge", 8, 30, 30, "nitro"),
    ("g5.24xlarge", 15, 50, 50, "nitro"),
    ("g5.2xlarge", 4, 15, 15, "nitro"),
    ("g5.48xlarge", 15, 50, 50, "nitro"),
    ("g5.4xlarge", 8, 30, 30, "nitro"),
    ("g5.8xlarge", 8, 30, 30, "nitro"),
    ("g5.xlarge", 4, 15, 15, "nitro"),
    ("g5g.16xlarge", 15, 50, 50, "nitro"),
    ("g5g.2xlarge", 4, 15, 15, "nitro"),
    ("g5g.4xlarge", 8, 30, 30, "nitro"),
    ("g5g.8xlarge", 8, 30, 30, "nitro"),
    ("g5g.metal", 15, 50, 50, ""),
    ("g5g.xlarge", 4, 15, 15, "nitro"),
    ("h1.16xlarge", 15, 50, 50, "xen"),
    ("h1.2xlarge", 4, 15, 15, "xen"),
    ("h1.4xlarge", 8, 30, 30, "xen"),
    ("h1.8xlarge", 8, 30, 30, "xen"),
    ("i2.2xlarge", 4, 15, 15, "xen"),
    ("i2.4xlarge", 8, 30, 30, "xen"),
    ("i2.8xlarge", 8, 30, 30, "xen"),
    ("i2.xlarge", 4, 15, 15, "xen"),
    ("i3.16xlarge", 15, 50, 50, "xen"),
    ("i3.2xlarge", 4, 15, 15, "xen"),
    ("i3.4xlarge", 8, 30, 30, "xen"),
    ("i3.8xlarge", 8, 30, 30, "xen"),
    ("i3.large", 3, 10, 10, "xen"),
    ("i3.metal", 15, 50, 50, ""),
    ("i3.xlarge", 4, 15, 15, "xen"),
    ("i3en.12xlarge", 8, 30, 30, "nitro"),
    ("i3en.24xlarge", 15, 50, 50, "nitro"),
    ("i3en.2xlarge", 4, 15, 15, "nitro"),
    ("i3en.3xlarge", 4, 15, 15, "nitro"),
    ("i3en.6xlarge", 8, 30, 30, "nitro"),
    ("i3en.large", 3, 10, 10, "nitro"),
    ("i3en.metal", 15, 50, 50, ""),
    ("i3en.xlarge", 4, 15, 15, "nitro"),
    ("im4gn.16xlarge", 15, 50, 50, "nitro"),
    ("im4gn.2xlarge", 4, 15, 15, "nitro"),
    ("im4gn.4xlarge", 8, 30, 30, "nitro"),
    ("im4gn.8xlarge", 8, 30, 30, "nitro"),
    ("im4gn.large", 3, 10, 10, "nitro"),
    ("im4gn.xlarge", 4, 15, 15, "nitro"),
    ("inf1.24xlarge", 11, 30, 30, "nitro"),
    ("inf1.2xlarge", 4, 10, 10, "nitro"),
    ("inf1.6xlarge", 8, 30, 30, "nitro"),
    ("inf1.xlarge", 4, 10, 10, "nitro"),
    ("is4gen.2xlarge", 4, 15, 15, "nitro"),
    ("is4gen.4xlarge", 8, 30, 30, "nitro"),
    ("is4gen.8xlarge", 8, 30, 30, "nitro"),
    ("is4gen.large", 3, 10, 10, "nitro"),
    ("is4gen.medium", 2, 4, 4, "nitro"),
    ("is4gen.xlarge", 4, 15, 15, "nitro"),
    ("m1.large", 3, 10, 0, "xen"),
    ("m1.medium", 2, 6, 0, "xen"),
    ("m1.small", 2, 4, 0, "xen"),
    ("m1.xlarge", 4, 15, 0, "xen"),
    ("m2.2xlarge", 4, 30, 0, "xen"),
    ("m2.4xlarge", 8, 30, 0, "xen"),
    ("m2.xlarge", 4, 15, 0, "xen"),
    ("m3.2xlarge", 4, 30, 0, "xen"),
    ("m3.large", 3, 10, 0, "xen"),
    ("m3.medium", 2, 6, 0, "xen"),
    ("m3.xlarge", 4, 15, 0, "xen"),
    ("m4.10xlarge", 8, 30, 30, "xen"),
    ("m4.16xlarge", 8, 30, 30, "xen"),
    ("m4.2xlarge", 4, 15, 15, "xen"),
    ("m4.4xlarge", 8, 30, 30, "xen"),
    ("m4.large", 2, 10, 10, "xen"),
    ("m4.xlarge", 4, 15, 15, "xen"),
    ("m5.12xlarge", 8, 30, 30, "nitro"),
    ("m5.16xlarge", 15, 50, 50, "nitro"),
    ("m5.24xlarge", 15, 50, 50, "nitro"),
    ("m5.2xlarge", 4, 15, 15, "nitro"),
    ("m5.4xlarge", 8, 30, 30, "nitro"),
    ("m5.8xlarge", 8, 30, 30, "nitro"),
    ("m5.large", 3, 10, 10, "nitro"),
    ("m5.metal", 15, 50, 50, ""),
    ("m5.xlarge", 4, 15, 15, "nitro"),
    ("m5a.12xlarge", 8, 30, 30, "nitro"),
    ("m5a.16xlarge", 15, 50, 50, "nitro"),
    ("m5a.24xlarge", 15, 50, 50, "nitro"),
    ("m5a.2xlarge", 4, 15, 15, "nitro"),
    ("m5a.4xlarge", 8, 30, 30, "nitro"),
    ("m5a.8xlarge", 8, 30, 30, "nitro"),
    ("m5a.large", 3, 10, 10, "nitro"),
    ("m5a.xlarge", 4, 15, 15, "nitro"),
    ("m5ad.12xlarge", 8, 30, 30, "nitro"),
    ("m5ad.16xlarge", 15, 50, 50, "nitro"),
    ("m5ad.24xlarge", 15, 50, 50, "nitro"),
    ("m5ad.2xlarge", 4, 15, 15, "nitro"),
    ("m5ad.4xlarge", 8, 30, 30, "nitro"),
    ("m5ad.8xlarge", 8, 30, 30, "nitro"),
    ("m5ad.large", 3, 10, 10, "nitro"),
    ("m5ad.xlarge", 4, 15, 15, "nitro"),
    ("m5d.12xlarge", 8, 30, 30, "nitro"),
    ("m5d.16xlarge", 15, 50, 50, "nitro"),
    ("m5d.24xlarge", 15, 50, 50, "nitro"),
    ("m5d.2xlarge", 4, 15, 15, "nitro"),
    ("m5d.4xlarge", 8, 30, 30, "nitro"),
    ("m5d.8xlarge", 8, 30, 30, "nitro"),
    ("m5d.large", 3, 10, 10, "nitro"),
    ("m5d.metal", 15, 50, 50, ""),
    ("m5d.xlarge", 4, 15, 15, "nitro"),
    ("m5dn.12xlarge", 8, 30, 30, "nitro"),
    ("m5dn.16xlarge", 15, 50, 50, "nitro"),
    ("m5dn.24xlarge", 15, 50, 50, "nitro"),
    ("m5dn.2xlarge", 4, 15, 15, "nitro"),
    ("m5dn.4xlarge", 8, 30, 30, "nitro"),
    ("m5dn.8xlarge", 8, 30, 30, "nitro"),
    ("m5dn.large", 3, 10, 10, "nitro"),
    ("m5dn.metal", 15, 50, 50, ""),
    ("m5dn.xlarge", 4, 15, 15, "nitro"),
    ("m5n.12xlarge", 8, 30, 30, "nitro"),
    ("m5n.16xlarge", 15, 50, 50, "nitro"),
    ("m5n.24xlarge", 15, 50, 50, "nitro"),
    ("m5n.2xlarge", 4, 15, 15, "nitro"),
    ("m5n.4xlarge", 8, 30, 30, "nitro"),
    ("m5n.8xlarge", 8, 30, 30, "nitro"),
    ("m5n.large", 3, 10, 10, "nitro"),
    ("m5n.metal", 15, 50, 50, ""),
    ("m5n.xlarge", 4, 15, 15, "nitro"),
    ("m5zn.12xlarge", 15, 50, 50, "nitro"),
    ("m5zn.2xlarge", 4, 15, 15, "nitro"),
    ("m5zn.3xlarge", 8, 30, 30, "nitro"),
    ("m5zn.6xlarge", 8, 30, 30, "nitro"),
    ("m5zn.large", 3, 10, 10, "nitro"),
    ("m5zn.metal", 15, 50, 50, ""),
    ("m5zn.xlarge", 4, 15, 15, "nitro"),
    ("m6a.12xlarge", 8, 30, 30, "nitro"),
    ("m6a.16xlarge", 15, 50, 50, "nitro"),
    ("m6a.24xlarge", 15, 50, 50, "nitro"),
    ("m6a.2xlarge", 4, 15, 15, "nitro"),
    ("m6a.32xlarge", 15, 50, 50, "nitro"),
    ("m6a.48xlarge", 15, 50, 50, "nitro"),
    ("m6a.4xlarge", 8, 30, 30, "nitro"),
    ("m6a.8xlarge", 8, 30, 30, "nitro"),
    ("m6a.large", 3, 10, 10, "nitro"),
    ("m6a.xlarge", 4, 15, 15, "nitro"),
    ("m6g.12xlarge", 8, 30, 30, "nitro"),
    ("m6g.16xlarge", 15, 50, 50, "nitro"),
    ("m6g.2xlarge", 4, 15, 15, "nitro"),
    ("m6g.4xlarge", 8, 30, 30, "nitro"),
    ("m6g.8xlarge", 8, 30, 30, "nitro"),
    ("m6g.large", 3, 10, 10, "nitro"),
    ("m6g.medium", 2, 4, 4, "nitro"),
    ("m6g.metal", 15, 50, 50, ""),
    ("m6g.xlarge", 4, 15, 15, "nitro"),
    ("m6gd.12xlarge", 8, 30, 30, "nitro"),
    ("m6gd.16xlarge", 15, 50, 50, "nitro"),
    ("m6gd.2xlarge", 4, 15, 15, "nitro"),
    ("m6gd.4xlarge", 8, 30, 30, "nitro"),
    ("m6gd.8xlarge", 8, 30, 30, "nitro"),
    ("m6gd.large", 3, 10, 10, "nitro"),
    ("m6gd.medium", 2, 4, 4, "nitro"),
    ("m6gd.metal", 15, 50, 50, ""),
    ("m6gd.xlarge", 4, 15, 15, "nitro"),
    ("m6i.12xlarge", 8, 30, 30, "nitro"),
    ("m6i.16xlarge", 15, 50, 50, "nitro"),
    ("m6i.24xlarge", 15, 50, 50, "nitro"),
    ("m6i.2xlarge", 4, 15, 15, "nitro"),
    ("m6i.32xlarge", 15, 50, 50, "nitro"),
    ("m6i.4xlarge", 8, 30, 30, "nitro"),
    ("m6i.8xlarge", 8, 30, 30, "nitro"),
    ("m6i.large", 3, 10, 10, "nitro"),
    ("m6i.metal", 15, 50, 50, ""),
    ("m6i.xlarge", 4, 15, 15, "nitro"),
    ("mac1.metal", 8, 30, 30, ""),
    ("p2.16xlarge", 8, 30, 30, "xen"),
    ("p2.8xlarge", 8, 30, 30, "xen"),
    ("p2.xlarge", 4, 15, 15, "xen"),
    ("p3.16xlarge", 8, 30, 30, "xen"),
    ("p3.2xlarge", 4, 15, 15, "xen"),
    ("p3.8xlarge", 8, 30, 30, "xen"),
    ("p3dn.24xlarge", 15, 50, 50, "nitro"),
    ("p4d.24xlarge", 60, 50, 50, "nitro"),
    ("r3.2xlarge", 4, 15, 15, "xen"),
    ("r3.4xlarge", 8, 30, 30, "xen"),
    ("r3.8xlarge", 8, 30, 30, "xen"),
    ("r3.large", 3, 10, 10, "xen"),
    ("r3.xlarge", 4, 15, 15, "xen"),
    ("r4.16xlarge", 15, 50, 50, "xen"),
    ("r4.2xlarge", 4, 15, 15, "xen"),
    ("r4.4xlarge", 8, 30, 30, "xen"),
    ("r4.8xlarge", 8, 30, 30, "xen"),
    ("r4.large", 3, 10, 10, "xen"),
    ("r4.xlarge", 4, 15, 15, "xen"),
    ("r5.12xlarge", 8, 30, 30, "nitro"),
    ("r5.16xlarge", 15, 50, 50, "nitro"),
    ("r5.24xlarge", 15, 50, 50, "nitro"),
    ("r5.2xlarge", 4, 15, 15, "nitro"),
    ("r5.4xlarge", 8, 30, 30, "nitro"),
    ("r5.8xlarge", 8, 30, 30, "nitro"),
    ("r5.large", 3, 10, 10, "nitro"),
    ("r5.metal", 15, 50, 50, ""),
    ("r5.xlarge", 4, 15, 15, "nitro"),
    ("r5a.12xlarge", 8, 30, 30, "nitro"),
    ("r5a.16xlarge", 15, 50, 50, "nitro"),
    ("r5a.24xlarge", 15, 50, 50, "nitro"),
    ("r5a.2xlarge", 4, 15, 15, "nitro"),
    ("r5a.4xlarge", 8, 30, 30, "nitro"),
    ("r5a.8xlarge", 8, 30, 30, "nitro"),
    ("r5a.large", 3, 10, 10, "nitro"),
    ("r5a.xlarge", 4, 15, 15, "nitro"),
    ("r5ad.12xlarge", 8, 30, 30, "nitro"),
    ("r5ad.16xlarge", 15, 50, 50, "nitro"),
    ("r5ad.24xlarge", 15, 50, 50, "nitro"),
    ("r5ad.2xlarge", 4, 15, 15, "nitro"),
    ("r5ad.4xlarge", 8, 30, 30, "nitro"),
    ("r5ad.8xlarge", 8, 30, 30, "nitro"),
    ("r5ad.large", 3, 10, 10, "nitro"),
    ("r5ad.xlarge", 4, 15, 15, "nitro"),
    ("r5b.12xlarge", 8, 30, 30, "nitro"),
    ("r5b.16xlarge", 15, 50, 50, "nitro"),
    ("r5b.24xlarge", 15, 50, 50, "nitro"),
    ("r5b.2xlarge", 4, 15, 15, "nitro"),
    ("r5b.4xlarge", 8, 30, 30, "nitro"),
    ("r5b.8xlarge", 8, 30, 30, "nitro"),
    ("r5b.large", 3, 10, 10, "nitro"),
    ("r5b.metal", 15, 50, 50, ""),
    ("r5b.xlarge", 4, 15, 15, "nitro"),
    ("r5d.12xlarge", 8, 30, 30, "nitro"),
    ("r5d.16xlarge", 15, 50, 50, "nitro"),
    ("r5d.24xlarge", 15, 50, 50, "nitro"),
    ("r5d.2xlarge", 4, 15, 15, "nitro"),
    ("r5d.4xlarge", 8, 30, 30, "nitro"),
    ("r5d.8xlarge", 8, 30, 30, "nitro"),
    ("r5d.large", 3, 10, 10, "nitro"),
    ("r5d.metal", 15, 50, 50, ""),
    ("r5d.xlarge", 4, 15, 15, "nitro"),
    ("r5dn.12xlarge", 8, 30, 30, "nitro"),
    ("r5dn.16xlarge", 15, 50, 50, "nitro"),
    ("r5dn.24xlarge", 15, 50, 50, "nitro"),
    ("r5dn.2xlarge", 4, 15, 15, "nitro"),
    ("r5dn.4xlarge", 8, 30, 30, "nitro"),
    ("r5dn.8xlarge", 8, 30, 30, "nitro"),
    ("r5dn.large", 3, 10, 10, "nitro"),
    ("r5dn.metal", 15, 50, 50, ""),
    ("r5dn.xlarge", 4, 15, 15, "nitro"),
    ("r5n.12xlarge", 8, 30, 30, "nitro"),
    ("r5n.16xlarge", 15, 50, 50, "nitro"),
    ("r5n.24xlarge", 15, 50, 50, "nitro"),
    ("r5n.2xlarge", 4, 15, 15, "nitro"),
    ("r5n.4xlarge", 8, 30, 30, "nitro"),
    ("r5n.8xlarge", 8, 30, 30, "nitro"),
    ("r5n.large", 3, 10, 10, "nitro"),
    ("r5n.metal", 15, 50, 50, ""),
    ("r5n.xlarge", 4, 15, 15, "nitro"),
    ("r6g.12xlarge", 8, 30, 30, "nitro"),
    ("r6g.16xlarge", 15, 50, 50, "nitro"),
    ("r6g.2xlarge", 4, 15, 15, "nitro"),
    ("r6g.4xlarge", 8, 30, 30, "nitro"),
    ("r6g.8xlarge", 8, 30, 30, "nitro"),
    ("r6g.large", 3, 10, 10, "nitro"),
    ("r6g.medium", 2, 4, 4, "nitro"),
    ("r6g.metal", 15, 50, 50, ""),
    ("r6g.xlarge", 4, 15, 15, "nitro"),
    ("r6gd.12xlarge", 8, 30, 30, "nitro"),
    ("r6gd.16xlarge", 15, 50, 50, "nitro"),
    ("r6gd.2xlarge", 4, 15, 15, "nitro"),
    ("r6gd.4xlarge", 8, 30, 30, "nitro"),
    ("r6gd.8xlarge", 8, 30, 30, "nitro"),
    ("r6gd.large", 3, 10, 10, "nitro"),
    ("r6gd.medium", 2, 4, 4, "nitro"),
    ("r6gd.metal", 15, 50, 50, ""),
    ("r6gd.xlarge", 4, 15, 15, "nitro"),
    ("r6i.12xlarge", 8, 30, 30, "nitro"),
    ("r6i.16xlarge", 15, 50, 50, "nitro"),
    ("r6i.24xlarge", 15, 50, 50, "nitro"),
    ("r6i.2xlarge", 4, 15, 15, "nitro"),
    ("r6i.32xlarge", 15, 50, 50, "nitro"),
    ("r6i.4xlarge", 8, 30, 30, "nitro"),
    ("r6i.8xlarge", 8, 30, 30, "nitro"),
    ("r6i.large", 3, 10, 10, "nitro"),
    ("r6i.metal", 15, 50, 50, ""),
    ("r6i.xlarge", 4, 15, 15, "nitro"),
    ("t1.micro", 2, 2, 0, "xen"),
    ("t2.2xlarge", 3, 15, 15, "xen"),
    ("t2.large", 3, 12, 12, "xen"),
    ("t2.medium", 3, 6, 6, "xen"),
    ("t2.micro", 2, 2, 2, "xen"),
    ("t2.nano", 2, 2, 2, "xen"),
    ("t2.small", 3, 4, 4, "xen"),
    ("t2.xlarge", 3, 15, 15, "xen"),
    ("t3.2xlarge", 4, 15, 15, "nitro"),
    ("t3.large", 3, 12, 12, "nitro"),
    ("t3.medium", 3, 6, 6, "nitro"),
    ("t3.micro", 2, 2, 2, "nitro"),
    ("t3.nano", 2, 2, 2, "nitro"),
    ("t3.small", 3, 4, 4, "nitro"),
    ("t3.xlarge", 4, 15, 15, "nitro"),
    ("t3a.2xlarge", 4, 15, 15, "nitro"),
    ("t3a.large", 3, 12, 12, "nitro"),
    ("t3a.medium", 3, 6, 6, "nitro"),
    ("t3a.micro", 2, 2, 2, "nitro"),
    ("t3a.nano", 2, 2, 2, "nitro"),
    ("t3a.small", 2, 4, 4, "nitro"),
    ("t3a.xlarge", 4, 15, 15, "nitro"),
    ("t4g.2xlarge", 4, 15, 15, "nitro"),
    ("t4g.large", 3, 12, 12, "nitro"),
    ("t4g.medium", 3, 6, 6, "nitro"),
    ("t4g.micro", 2, 2, 2, "nitro"),
    ("t4g.nano", 2, 2, 2, "nitro"),
    ("t4g.small", 3, 4, 4, "nitro"),
    ("t4g.xlarge", 4, 15, 15, "nitro"),
    ("u-12tb1.112xlarge", 15, 50, 50, "nitro"),
    ("u-3tb1.56xlarge", 8, 30, 30, "nitro"),
    ("u-6tb1.112xlarge", 15, 50, 50, "nitro"),
    ("u-6tb1.56xlarge", 15, 50, 50, "nitro"),
    ("u-9tb1.112xlarge", 15, 50, 50, "nitro"),
    ("vt1.24xlarge", 15, 50, 50, "nitro"),
    ("vt1.3xlarge", 4, 15, 15, "nitro"),
    ("vt1.6xlarge", 8, 30, 30, "nitro"),
    ("x1.16xlarge", 8, 30, 30, "xen"),
    ("x1.32xlarge", 8, 30, 30, "xen"),
    ("x1e.16xlarge", 8, 30, 30, "xen"),
    ("x1e.2xlarge", 4, 15, 15, "xen"),
    ("x1e.32xlarge", 8, 30, 30, "xen"),
    ("x1e.4xlarge", 4, 15, 15, "xen"),
    ("x1e.8xlarge", 4, 15, 15, "xen"),
    ("x1e.xlarge", 3, 10, 10, "xen"),
    ("x2gd.12xlarge", 8, 30, 30, "nitro"),
    ("x2gd.16xlarge", 15, 50, 50, "nitro"),
    ("x2gd.2xlarge", 4, 15, 15, "nitro"),
    ("x2gd.4xlarge", 8, 30, 30, "nitro"),
    ("x2gd.8xlarge", 8, 30, 30, "nitro"),
    ("x2gd.large", 3, 10, 10, "nitro"),
    ("x2gd.medium", 2, 4, 4, "nitro"),
    ("x2gd.metal", 15, 50, 50, ""),
    ("x2gd.xlarge", 4, 15, 15, "nitro"),
    ("x2iezn.12xlarge", 15, 50, 50, "nitro"),
    ("x2iezn.2xlarge", 4, 15, 15, "nitro"),
    ("x2iezn.4xlarge", 8, 30, 30, "nitro"),
    ("x2iezn.6xlarge", 8, 30, 30, "nitro"),
    ("x2iezn.8xlarge", 8, 30, 30, "nitro"),
    ("x2iezn.metal", 15, 50, 50, ""),
    ("z1d.12xlarge", 15, 50, 50, "nitro"),
    ("z1d.2xlarge", 4, 15, 15, "nitro"),
    ("z1d.3xlarge", 8, 30, 30, "nitro"),
    ("z1d.6xlarge", 8, 30, 30, "nitro"),
    ("z1d.large", 3, 10, 10, "nitro"),
    ("z1d.metal", 15, 50, 50, ""),
    ("z1d.xlarge", 4, 15, 15, "nitro"),
];

/// Builds the seed map from [`STATIC_LIMITS`].
pub fn static_limits() -> HashMap<String, InstanceLimits> {
    STATIC_LIMITS
        .iter()
        .map(|&(instance_type, adapters, ipv4, ipv6, hypervisor)| {
            (
                instance_type.to_string(),
                InstanceLimits::new(adapters, ipv4, ipv6).with_hypervisor(hypervisor),
            )
        })
        .collect()
}
