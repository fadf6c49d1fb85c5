//! Compute instance blocks.

use si_protocol::{CloudProvider, NetworkingChoice, ProvisionConfig};

pub fn render(config: &ProvisionConfig) -> String {
    match config.provider {
        CloudProvider::Aws => aws(config),
        CloudProvider::Azure => azure(config),
        CloudProvider::Gcp => gcp(config),
    }
}

const AWS_UBUNTU_AMI: &str = r#"
data "aws_ami" "ubuntu" {
  most_recent = true
  owners      = ["099720109477"] # Canonical

  filter {
    name   = "name"
    values = ["ubuntu/images/hvm-ssd/ubuntu-jammy-22.04-amd64-server-*"]
  }
}
"#;

fn aws(config: &ProvisionConfig) -> String {
    let (ami_data_source, ami_ref) = match config.operating_system.as_str() {
        "Amazon Linux" => ("", "data.aws_ami.amazon_linux.id"),
        "Windows" => ("", "data.aws_ami.windows.id"),
        _ => (AWS_UBUNTU_AMI, "data.aws_ami.ubuntu.id"),
    };
    let subnet_line = match config.networking {
        NetworkingChoice::CustomVpc => "  subnet_id              = aws_subnet.public.id\n",
        NetworkingChoice::DefaultVpc => "",
    };
    format!(
        r#"{ami_data_source}
resource "aws_instance" "main" {{
  ami                    = {ami_ref}
  instance_type          = "{instance_type}"
{subnet_line}  vpc_security_group_ids = [aws_security_group.main.id]

  tags = {{
    Name = "main-server"
    OS   = "{os}"
  }}
}}
"#,
        instance_type = config.instance_type,
        os = config.operating_system,
    )
}

fn azure(config: &ProvisionConfig) -> String {
    format!(
        r#"
resource "azurerm_network_interface" "main" {{
  name                = "main-nic"
  location            = azurerm_resource_group.main.location
  resource_group_name = azurerm_resource_group.main.name

  ip_configuration {{
    name                          = "internal"
    subnet_id                     = azurerm_subnet.main.id
    private_ip_address_allocation = "Dynamic"
  }}
}}

resource "azurerm_linux_virtual_machine" "main" {{
  name                = "main-vm"
  resource_group_name = azurerm_resource_group.main.name
  location            = azurerm_resource_group.main.location
  size                = "{size}"
  admin_username      = "adminuser"

  network_interface_ids = [
    azurerm_network_interface.main.id,
  ]

  admin_ssh_key {{
    username   = "adminuser"
    public_key = file("~/.ssh/id_rsa.pub")
  }}

  os_disk {{
    caching              = "ReadWrite"
    storage_account_type = "Standard_LRS"
  }}

  source_image_reference {{
    publisher = "Canonical"
    offer     = "0001-com-ubuntu-server-jammy"
    sku       = "22_04-lts"
    version   = "latest"
  }}
}}
"#,
        size = config.instance_type,
    )
}

fn gcp(config: &ProvisionConfig) -> String {
    format!(
        r#"
resource "google_compute_instance" "main" {{
  name         = "main-instance"
  machine_type = "{machine_type}"
  zone         = "${{var.region}}-a"

  boot_disk {{
    initialize_params {{
      image = "ubuntu-os-cloud/ubuntu-2204-lts"
    }}
  }}

  network_interface {{
    subnetwork = google_compute_subnetwork.main.id

    access_config {{
      // Ephemeral public IP
    }}
  }}
}}
"#,
        machine_type = config.instance_type,
    )
}
